use crate::numerals::groups_base_10000;

// Financial uppercase numerals used on HK cheques.
const DIGITS: [&str; 10] = ["零", "壹", "貳", "叁", "肆", "伍", "陸", "柒", "捌", "玖"];
const UNITS: [&str; 4] = ["", "拾", "佰", "仟"];
const GROUP_UNITS: [&str; 4] = ["", "萬", "億", "兆"];

const DOLLAR: &str = "元";
const EXACT: &str = "正";
const TEN_CENT: &str = "角";
const CENT: &str = "分";

/// Expands a non-negative integer into Traditional Chinese financial
/// uppercase wording, e.g. `120034` -> `壹拾貳萬零叁拾肆`.
pub fn expand(n: u64) -> String {
    if n == 0 {
        return DIGITS[0].to_string();
    }

    let groups = groups_base_10000(n);
    let mut result = String::new();
    // Crossed one or more all-zero 10^4 groups since the last emission.
    let mut zero_pending = false;

    for idx in (0..groups.len()).rev() {
        let group = groups[idx];
        if group == 0 {
            if !result.is_empty() {
                zero_pending = true;
            }
            continue;
        }
        // A single 零 links the previous emission to this group when empty
        // groups were skipped, or when this group has leading zeros of its
        // own (value < 1000), e.g. 1000001 -> 壹佰萬零壹.
        if !result.is_empty() && (zero_pending || group < 1000) {
            result.push_str(DIGITS[0]);
            zero_pending = false;
        }
        result.push_str(&expand_group(group));
        result.push_str(GROUP_UNITS.get(idx).copied().unwrap_or_default());
    }

    result
}

/// Expands one 4-digit group without its group unit. Explicit tens (10 ->
/// 壹拾), internal zeros collapsed to a single 零, never a leading 零.
fn expand_group(group: u16) -> String {
    let digits = [
        (group / 1000) % 10,
        (group / 100) % 10,
        (group / 10) % 10,
        group % 10,
    ];

    let mut words = String::new();
    let mut zero_pending = false;
    for (pos, &digit) in digits.iter().enumerate() {
        if digit == 0 {
            zero_pending = true;
            continue;
        }
        if zero_pending {
            if !words.is_empty() {
                words.push_str(DIGITS[0]);
            }
            zero_pending = false;
        }
        words.push_str(DIGITS[digit as usize]);
        words.push_str(UNITS[3 - pos]);
    }
    words
}

/// Full Chinese amount wording with dollar and cent units: 元, then 正 for
/// exact amounts, or 角/分 with the usual zero separator rule.
pub fn amount_wording(whole: u64, subunit: u8) -> String {
    let mut wording = expand(whole);
    wording.push_str(DOLLAR);

    if subunit == 0 {
        wording.push_str(EXACT);
        return wording;
    }

    let tens = (subunit / 10) as usize;
    let cents = (subunit % 10) as usize;
    if tens > 0 {
        wording.push_str(DIGITS[tens]);
        wording.push_str(TEN_CENT);
    } else {
        // Zero 角 with non-zero 分 takes one separator, e.g. 零伍分.
        wording.push_str(DIGITS[0]);
    }
    if cents > 0 {
        wording.push_str(DIGITS[cents]);
        wording.push_str(CENT);
    }
    wording
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_zero() {
        assert_eq!(expand(0), "零");
    }

    #[test]
    fn uses_explicit_tens() {
        assert_eq!(expand(10), "壹拾");
        assert_eq!(expand(14), "壹拾肆");
    }

    #[test]
    fn collapses_internal_zeros_within_a_group() {
        assert_eq!(expand(1001), "壹仟零壹");
        assert_eq!(expand(1010), "壹仟零壹拾");
        assert_eq!(expand(9009), "玖仟零玖");
    }

    #[test]
    fn links_groups_with_a_single_zero() {
        assert_eq!(expand(120_034), "壹拾貳萬零叁拾肆");
        assert_eq!(expand(1_000_001), "壹佰萬零壹");
        assert_eq!(expand(2_000_001), "貳佰萬零壹");
        assert_eq!(expand(100_000_001), "壹億零壹");
    }

    #[test]
    fn no_zero_when_lower_group_fills_its_digits() {
        assert_eq!(expand(11_234), "壹萬壹仟貳佰叁拾肆");
    }

    #[test]
    fn never_doubles_or_leads_with_the_separator() {
        for n in (0..20_000u64).chain([1_000_001, 100_000_001, 5_000_600_070]) {
            let words = expand(n);
            assert!(!words.contains("零零"), "{n} -> {words}");
            if n != 0 {
                assert!(!words.starts_with('零'), "{n} -> {words}");
            }
        }
    }

    #[test]
    fn exact_amounts_end_with_the_exact_marker() {
        assert_eq!(amount_wording(123, 0), "壹佰貳拾叁元正");
        assert_eq!(amount_wording(0, 0), "零元正");
    }

    #[test]
    fn cent_wording_inserts_separator_for_zero_tens() {
        assert_eq!(amount_wording(0, 5), "零元零伍分");
    }

    #[test]
    fn cent_wording_drops_trailing_zero_cents() {
        assert_eq!(amount_wording(123, 40), "壹佰貳拾叁元肆角");
    }

    #[test]
    fn cent_wording_with_both_units() {
        assert_eq!(amount_wording(1, 45), "壹元肆角伍分");
    }
}
