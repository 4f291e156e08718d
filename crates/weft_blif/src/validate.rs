//! Electrical well-formedness checks on the finished graph.
//!
//! Runs after net unification, in two passes: bidirectional toplevel
//! ports must reach the chip boundary through an `SB_IO` pad, and every
//! net off the boundary carries at most one driver.

use crate::codes;
use std::collections::HashSet;
use weft_common::Interner;
use weft_diagnostics::Diagnostic;
use weft_netlist::{Design, ModelId, NetId, PortOwner};
use weft_source::Span;

/// Checks the top model of a finished design.
///
/// `io_model` is the registered `SB_IO` primitive; `at` is the position
/// reported for failures (the graph as a whole has no single line).
pub fn check(
    design: &Design,
    top: ModelId,
    io_model: ModelId,
    interner: &Interner,
    at: Span,
) -> Result<(), Diagnostic> {
    let model = design.model(top);
    let package_pin = interner.intern("PACKAGE_PIN");

    // A bidirectional toplevel port is only legal as a pad wire: its net
    // must lead straight to the PACKAGE_PIN of an SB_IO instance.
    for &port_id in model.interface() {
        let port = model.port(port_id);
        if !port.is_bidir() || port.net.is_none() {
            continue;
        }
        let pad = model.other_connection(port_id).filter(|&other| {
            let other = model.port(other);
            other.name == package_pin
                && matches!(other.owner, PortOwner::Instance(instance)
                    if model.instance(instance).instance_of == io_model)
        });
        if pad.is_none() {
            return Err(Diagnostic::error(
                codes::BAD_INOUT_PORT,
                format!(
                    "toplevel inout port '{}' not connected to SB_IO PACKAGE_PIN",
                    interner.resolve(port.name)
                ),
                at,
            ));
        }
    }

    // Each SB_IO pad claims its PACKAGE_PIN net for the chip boundary;
    // those nets are exempt from the single-driver rule below.
    let mut boundary: HashSet<NetId> = HashSet::new();
    for (_, instance) in model.instances() {
        if instance.instance_of != io_model {
            continue;
        }
        let net = instance.pin(package_pin).and_then(|pin| {
            let net = model.port(pin).net?;
            let other = model.other_connection(pin)?;
            (model.port(other).owner == PortOwner::Model).then_some(net)
        });
        match net {
            Some(net) => {
                boundary.insert(net);
            }
            None => {
                return Err(Diagnostic::error(
                    codes::BAD_PACKAGE_PIN,
                    "SB_IO PACKAGE_PIN not connected to toplevel port",
                    at,
                ))
            }
        }
    }

    for (net_id, net) in model.nets() {
        if boundary.contains(&net_id) {
            continue;
        }
        let mut drivers = u32::from(net.is_constant());
        for &port in &net.connections {
            if model.port(port).drives_net() {
                drivers += 1;
            }
        }
        if drivers > 1 {
            return Err(Diagnostic::error(
                codes::MULTIPLE_DRIVERS,
                format!("net `{}' has multiple drivers", interner.resolve(net.name)),
                at,
            ));
        }
    }

    Ok(())
}
