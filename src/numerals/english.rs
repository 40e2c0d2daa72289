use crate::numerals::groups_base_1000;

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];
const SCALES: [&str; 5] = ["", "thousand", "million", "billion", "trillion"];

/// Expands a non-negative integer into English cheque wording in the
/// HK/British style: "and" inside hundreds, hyphenated 21-99, and an "and"
/// before a final group below 100 (`1010` -> `One thousand and ten`).
pub fn expand(n: u64) -> String {
    if n == 0 {
        return capitalize_first(ONES[0]);
    }

    let groups = groups_base_1000(n);
    let mut segments: Vec<String> = Vec::new();
    let mut lowest_nonzero = 0u16;

    for (idx, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        let mut segment = under_1000(group);
        if idx > 0 {
            segment.push(' ');
            segment.push_str(SCALES.get(idx).copied().unwrap_or_default());
        }
        segments.push(segment);
        lowest_nonzero = group;
    }

    // The cross-group "and" keys off the lowest non-zero group only;
    // interior zero groups get no marker of their own.
    if segments.len() > 1 && lowest_nonzero < 100 {
        if let Some(last) = segments.last_mut() {
            last.insert_str(0, "and ");
        }
    }

    capitalize_first(&segments.join(" "))
}

fn under_1000(n: u16) -> String {
    let hundreds = n / 100;
    let remainder = n % 100;
    if hundreds == 0 {
        return under_100(remainder).to_string();
    }
    let mut words = format!("{} hundred", ONES[hundreds as usize]);
    if remainder > 0 {
        words.push_str(" and ");
        words.push_str(&under_100(remainder));
    }
    words
}

fn under_100(n: u16) -> String {
    if n < 20 {
        return ONES[n as usize].to_string();
    }
    let tens = TENS[(n / 10) as usize];
    match n % 10 {
        0 => tens.to_string(),
        ones => format!("{tens}-{}", ONES[ones as usize]),
    }
}

fn capitalize_first(words: &str) -> String {
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Full English amount wording: the whole-dollar words, then
/// `and <cents> cent(s)` when a fractional part is present.
pub fn amount_wording(whole: u64, subunit: u8) -> String {
    let mut wording = expand(whole);
    if subunit > 0 {
        wording.push_str(" and ");
        wording.push_str(&under_100(subunit as u16));
        wording.push_str(if subunit == 1 { " cent" } else { " cents" });
    }
    wording
}
