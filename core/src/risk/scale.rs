//! Qualitative labels for the 1-5 likelihood and severity scales.

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

pub fn likelihood_label(value: u8) -> &'static str {
    match value {
        1 => "Inconceivable",
        2 => "Unlikely",
        3 => "Possible",
        4 => "Likely",
        5 => "Most Likely",
        _ => "Unrated",
    }
}

pub fn severity_label(value: u8) -> &'static str {
    match value {
        1 => "Negligible",
        2 => "Minor",
        3 => "Moderate",
        4 => "Major",
        5 => "Catastrophic",
        _ => "Unrated",
    }
}

pub fn in_range(value: u8) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&value)
}
