//! JvN: von Neumann's 29-state universal constructor.

use super::handle::EngineHandle;
use super::hlife::DEFAULT_MAX_MEMORY;
use super::xpm_data::JVN_7X7;
use lifealgo_core::{AlgoData, IconSize, Result, HASHING_BASE};
use lifealgo_data::Rgb;

pub const NAME: &str = "JvN";

const STATES: usize = 29;

pub fn init_algo_info(ad: &mut AlgoData) -> Result<()> {
    ad.set_name(NAME).set_creator(EngineHandle::creator(NAME));
    ad.max_memory = DEFAULT_MAX_MEMORY;
    ad.default_base = HASHING_BASE;
    ad.max_states = STATES;

    let mut colors = [Rgb::BLACK; STATES];
    colors[0] = Rgb::new(48, 48, 48);
    // sensitized states in blues, ordinary transmission in greens and
    // special transmission in reds
    for (i, color) in colors.iter_mut().enumerate().skip(1) {
        *color = match i {
            1..=8 => Rgb::new(0, 0, 100 + 19 * i as u8),
            9..=16 => Rgb::new(0, 60 + 24 * (i - 8) as u8, 0),
            17..=24 => Rgb::new(60 + 24 * (i - 16) as u8, 0, 0),
            _ => Rgb::new(255, 255, 40 * (i - 24) as u8),
        };
    }
    ad.set_default_colors(&colors);
    ad.create_icon_sets(IconSize::Small, JVN_7X7)?;
    Ok(())
}
