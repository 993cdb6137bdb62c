//! `car_secrets.h` renderer.

use std::fmt::Write;

use crate::constants::{CAR_HEADER_GUARD, PASSWORD};
use crate::header::HeaderTemplate;
use crate::models::CarId;

/// Constants compiled into the car firmware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarHeader {
    pub car_id: CarId,
    pub secret: i128,
}

impl CarHeader {
    pub fn new(car_id: CarId, secret: i128) -> Self {
        Self { car_id, secret }
    }
}

impl HeaderTemplate for CarHeader {
    fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "#ifndef {CAR_HEADER_GUARD}");
        let _ = writeln!(out, "#define {CAR_HEADER_GUARD}\n");
        let _ = writeln!(out, "#define CAR_SECRET {}\n", self.secret);
        let _ = writeln!(out, "#define CAR_ID \"{}\"\n", self.car_id);
        let _ = writeln!(out, "#define PASSWORD \"{PASSWORD}\"\n");
        out.push_str("#endif\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_exact_layout() {
        let header = CarHeader::new(CarId(7), 8);
        let expected = "\
#ifndef __CAR_SECRETS__
#define __CAR_SECRETS__

#define CAR_SECRET 8

#define CAR_ID \"7\"

#define PASSWORD \"unlock\"

#endif
";
        assert_eq!(header.render(), expected);
    }

    #[test]
    fn each_constant_appears_once() {
        let text = CarHeader::new(CarId(123), 124).render();
        assert_eq!(text.matches("#define CAR_SECRET ").count(), 1);
        assert_eq!(text.matches("#define CAR_ID ").count(), 1);
        assert_eq!(text.matches("#define PASSWORD \"unlock\"").count(), 1);
    }

    #[test]
    fn negative_ids_render_unquoted_secret() {
        let text = CarHeader::new(CarId(-2), -1).render();
        assert!(text.contains("#define CAR_SECRET -1\n"));
        assert!(text.contains("#define CAR_ID \"-2\"\n"));
    }
}
