//! The iCE40 standard-cell registry.
//!
//! Registers the primitive models that `.gate` directives may
//! instantiate. Graph validation depends only on `SB_IO` and its
//! `PACKAGE_PIN`; the remaining cells exist so realistic netlists
//! resolve.

use crate::design::Design;
use crate::ids::ModelId;
use crate::model::Model;
use crate::port::Direction;
use weft_common::Interner;

/// Registers the standard cells into `design`, returning the id of
/// `SB_IO` (which graph validation keys on).
///
/// Must run before parsing begins, so `.gate` directives can resolve
/// the cells by name.
pub fn register_standard_cells(design: &mut Design, interner: &Interner) -> ModelId {
    use Direction::{In, InOut, Out};

    let mut sb_io = Model::primitive(interner.intern("SB_IO"));
    for (pin, direction) in [
        ("PACKAGE_PIN", InOut),
        ("LATCH_INPUT_VALUE", In),
        ("CLOCK_ENABLE", In),
        ("INPUT_CLK", In),
        ("OUTPUT_CLK", In),
        ("OUTPUT_ENABLE", In),
        ("D_OUT_0", In),
        ("D_OUT_1", In),
        ("D_IN_0", Out),
        ("D_IN_1", Out),
    ] {
        sb_io.add_port(interner.intern(pin), direction);
    }
    let io_model = design.add_model(sb_io);

    let cells: &[(&str, &[(&str, Direction)])] = &[
        (
            "SB_LUT4",
            &[
                ("I0", In),
                ("I1", In),
                ("I2", In),
                ("I3", In),
                ("O", Out),
            ],
        ),
        (
            "SB_CARRY",
            &[("CI", In), ("I0", In), ("I1", In), ("CO", Out)],
        ),
        (
            "SB_GB",
            &[
                ("USER_SIGNAL_TO_GLOBAL_BUFFER", In),
                ("GLOBAL_BUFFER_OUTPUT", Out),
            ],
        ),
        ("SB_DFF", &[("C", In), ("D", In), ("Q", Out)]),
        ("SB_DFFE", &[("C", In), ("E", In), ("D", In), ("Q", Out)]),
        (
            "SB_DFFSR",
            &[("C", In), ("R", In), ("D", In), ("Q", Out)],
        ),
    ];

    for (cell, pins) in cells {
        let mut model = Model::primitive(interner.intern(cell));
        for (pin, direction) in *pins {
            model.add_port(interner.intern(pin), *direction);
        }
        design.add_model(model);
    }

    io_model
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sb_io_has_package_pin() {
        let interner = Interner::new();
        let mut design = Design::new();
        let returned = register_standard_cells(&mut design, &interner);

        let io = design.find_model(interner.intern("SB_IO")).unwrap();
        assert_eq!(returned, io);
        let io = design.model(io);
        assert!(io.is_primitive);
        let pin = io.find_port(interner.intern("PACKAGE_PIN")).unwrap();
        assert_eq!(io.port(pin).direction, Direction::InOut);
    }

    #[test]
    fn lut_and_carry_present() {
        let interner = Interner::new();
        let mut design = Design::new();
        register_standard_cells(&mut design, &interner);

        let lut = design.find_model(interner.intern("SB_LUT4")).unwrap();
        assert_eq!(design.model(lut).interface().len(), 5);
        assert!(design.find_model(interner.intern("SB_CARRY")).is_some());
        assert!(design.find_model(interner.intern("SB_GB")).is_some());
    }

    #[test]
    fn dff_variants_present() {
        let interner = Interner::new();
        let mut design = Design::new();
        register_standard_cells(&mut design, &interner);

        for cell in ["SB_DFF", "SB_DFFE", "SB_DFFSR"] {
            let id = design.find_model(interner.intern(cell)).unwrap();
            let model = design.model(id);
            assert!(model.find_port(interner.intern("Q")).is_some(), "{cell}");
        }
    }
}
