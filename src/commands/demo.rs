//! `idioms demo` command, also the default when no command is given.

use std::io::Write;
use std::rc::Rc;

use tracing::{debug, info};

use super::write_error;
use crate::context::{IntObject, ServiceContext};
use crate::error::DomainError;
use crate::objects::{
    classify, print_to, Cloneable, ConcreteCloneable, ConcretePrintable, ObjectStore, Printable,
};
use crate::ports::Id;

/// Execute the demo sequence, writing its transcript to `out`.
///
/// # Errors
///
/// Returns an error string if the generator is exhausted or `out` fails.
pub fn run(ctx: &mut ServiceContext, out: &mut dyn Write) -> Result<(), String> {
    let id = ctx.id_gen.next_id().map_err(|e| format!("Failed to generate id: {e}"))?;
    writeln!(out, "Generated ID for int object: {id}").map_err(write_error)?;

    let shared = ctx.instance();
    debug!(handles = Rc::strong_count(&shared), "fetched shared instance");

    let printable = ConcretePrintable;
    print_to(out, &printable).map_err(write_error)?;

    let original = ConcreteCloneable::new("original");
    let copy = original.clone();
    let boxed: Box<dyn Cloneable> = Box::new(original);
    let boxed_copy = boxed.clone_boxed();
    debug!(copy = copy.label(), boxed_copy = boxed_copy.label(), "cloned objects");

    // Nothing has been registered under the fresh id yet.
    let mut store = ObjectStore::<IntObject>::new();
    debug!(empty = store.is_empty(), "looking up int object");
    match store.get(id) {
        Ok(value) => debug!(%id, value, "found object"),
        Err(err) => report(out, err)?,
    }
    store.insert(id, IntObject::default());
    debug!(%id, stored = store.len(), "registered int object");

    match Id::<IntObject>::try_from(Id::<IntObject>::INVALID) {
        Ok(checked) => debug!(%checked, "identifier accepted"),
        Err(err) => report(out, err)?,
    }

    let dynamic: Box<dyn Printable> = Box::new(ConcretePrintable);
    let kind = classify(dynamic.as_ref());
    info!(?kind, "demo finished");

    Ok(())
}

fn report(out: &mut dyn Write, err: DomainError) -> Result<(), String> {
    writeln!(out, "Caught exception: {err}").map_err(write_error)
}
