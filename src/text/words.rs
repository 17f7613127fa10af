//! Word lists used by the word-removal transforms.

/// Cardinal numbers spelled out as words.
pub const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "trillion",
];

/// Units and names of time.
///
/// `may` and `march` are left out because they are far more common as
/// ordinary words.
pub const TIME_WORDS: &[&str] = &[
    "second", "minute", "hour", "day", "week", "fortnight", "month", "year", "decade", "century",
    "millennium", "morning", "afternoon", "evening", "night", "today", "tonight", "tomorrow",
    "yesterday", "weekend", "weekday", "monday", "tuesday", "wednesday", "thursday", "friday",
    "saturday", "sunday", "january", "february", "april", "june", "july", "august", "september",
    "october", "november", "december",
];

/// Words that end with a period without ending a sentence.
pub const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "mt", "ft", "gen", "col", "lt", "sgt",
    "capt", "rev", "hon", "inc", "ltd", "corp", "co", "dept", "fig", "vol", "approx", "cf", "al",
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

/// ASCII punctuation characters.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;
