//! The driver sweep.
//!
//! One pass over the function body: every operation with a matching policy
//! is converted and spliced into its slot; declines are logged and skipped.
//! The pass fails — after the sweep, so successful conversions stick — when
//! any operation remains in buffer form.

use snafu::ensure;
use tracing::{debug, debug_span, warn};

use loam_ir::{BufferOp, Function};

use crate::error::{OperationsLeftUnconvertedSnafu, Result};
use crate::nestify::convert_operation;

/// Registration name for external pass drivers.
pub const NAME: &str = "nestify";
/// Registration description for external pass drivers.
pub const DESCRIPTION: &str = "Legalize buffer operations to parallel loop nests";

/// Legalize every operation in `func` to a parallel loop nest.
///
/// Running the pass on an already-converted function is a no-op: loop nests
/// match no policy and are counted as legal.
pub fn run(func: &mut Function) -> Result<()> {
    let span = debug_span!("nestify", function = %func.name());
    let _guard = span.enter();

    for position in 0..func.body().len() {
        let op = &func.body()[position];
        let Some(converted) = convert_operation(func, op) else { continue };
        match converted {
            Ok(nest) => {
                debug!(position, rank = nest.nest_rank(), "legalized operation to loop nest");
                func.replace(position, BufferOp::LoopNest(nest));
            }
            Err(error) => {
                debug!(position, op = func.body()[position].tag(), %error, "pattern not applicable");
            }
        }
    }

    let remaining = func.body().iter().filter(|op| !op.is_loop_nest()).count();
    if remaining != 0 {
        warn!(remaining, "operations left unconverted");
    }
    ensure!(remaining == 0, OperationsLeftUnconvertedSnafu { remaining });
    Ok(())
}
