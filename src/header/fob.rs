//! `fob_secrets.h` renderer.
//!
//! A paired fob carries the real PIN, car id and car secret. An unpaired fob
//! gets the same layout with every value replaced by a placeholder.

use std::fmt::Write;

use crate::constants::{FOB_HEADER_GUARD, PASSWORD, UNPAIRED_PLACEHOLDER};
use crate::header::HeaderTemplate;
use crate::models::CarId;

/// Constants compiled into the fob firmware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FobHeader {
    pub paired: bool,
    pub pair_pin: String,
    pub car_id: String,
    pub car_secret: String,
}

impl FobHeader {
    pub fn paired(car_id: CarId, pair_pin: impl Into<String>, car_secret: i128) -> Self {
        Self {
            paired: true,
            pair_pin: pair_pin.into(),
            car_id: car_id.to_string(),
            car_secret: car_secret.to_string(),
        }
    }

    pub fn unpaired() -> Self {
        Self {
            paired: false,
            pair_pin: UNPAIRED_PLACEHOLDER.to_string(),
            car_id: UNPAIRED_PLACEHOLDER.to_string(),
            car_secret: UNPAIRED_PLACEHOLDER.to_string(),
        }
    }
}

impl HeaderTemplate for FobHeader {
    fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "#ifndef {FOB_HEADER_GUARD}");
        let _ = writeln!(out, "#define {FOB_HEADER_GUARD}\n");
        let _ = writeln!(out, "#define PAIRED {}", u8::from(self.paired));
        let _ = writeln!(out, "#define PAIR_PIN \"{}\"", self.pair_pin);
        let _ = writeln!(out, "#define CAR_ID \"{}\"", self.car_id);
        let _ = writeln!(out, "#define CAR_SECRET \"{}\"\n", self.car_secret);
        let _ = writeln!(out, "#define PASSWORD \"{PASSWORD}\"\n");
        out.push_str("#endif\n");
        out
    }
}
