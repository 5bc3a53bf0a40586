use sortr_common::config::{BULKY_VOLUME, HEAVY_MASS, OVERSIZED_DIMENSION};

use crate::terminal::print;

pub fn thresholds() {
    print::set_key_width("oversized dimension".len());
    print::aligned_line("oversized dimension", format!("{OVERSIZED_DIMENSION} cm"));
    print::aligned_line("bulky volume", format!("{BULKY_VOLUME} cm³"));
    print::aligned_line("heavy mass", format!("{HEAVY_MASS}"));
}
