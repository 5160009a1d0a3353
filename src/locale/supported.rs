/// Locale identifiers offered by the sheet, in display order.
///
/// Every tag maps onto a POSIX locale with date/time data (`en-GB` -> `en_GB`)
/// that the formatter can render in every style.
pub(crate) const SUPPORTED_LOCALES: &[&str] = &[
    "af-ZA", "ar-AE", "ar-EG", "ar-SA", "bg-BG", "bn-BD", "bn-IN", "ca-ES", "cs-CZ", "cy-GB",
    "da-DK", "de-AT", "de-BE", "de-CH", "de-DE", "de-LU", "el-GR", "en-AU", "en-CA", "en-GB",
    "en-IE", "en-IN", "en-NZ", "en-PH", "en-SG", "en-US", "en-ZA", "es-AR", "es-CL", "es-CO",
    "es-ES", "es-MX", "es-PE", "es-US", "et-EE", "eu-ES", "fa-IR", "fi-FI", "fil-PH", "fr-BE",
    "fr-CA", "fr-CH", "fr-FR", "fr-LU", "ga-IE", "gl-ES", "gu-IN", "he-IL", "hi-IN", "hr-HR",
    "hu-HU", "hy-AM", "id-ID", "is-IS", "it-CH", "it-IT", "ja-JP", "ka-GE", "kk-KZ", "km-KH",
    "kn-IN", "ko-KR", "lt-LT", "lv-LV", "mk-MK", "ml-IN", "mn-MN", "mr-IN", "ms-MY", "mt-MT",
    "nb-NO", "ne-NP", "nl-BE", "nl-NL", "nn-NO", "pa-IN", "pl-PL", "pt-BR", "pt-PT", "ro-RO",
    "ru-RU", "si-LK", "sk-SK", "sl-SI", "sq-AL", "sr-RS", "sv-FI", "sv-SE", "sw-KE", "ta-IN",
    "te-IN", "th-TH", "tr-TR", "uk-UA", "ur-PK", "uz-UZ", "vi-VN", "zh-CN", "zh-HK", "zh-SG",
    "zh-TW",
];
