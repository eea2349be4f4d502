//! Drives the commands against a replaying context.
//!
//! Proves the demo and `ids` output is a function of the identifiers the
//! context's generator hands out, and nothing else.

use idioms::cli::{Command, OutputFormat};
use idioms::commands::dispatch_with_context;
use idioms::context::ServiceContext;
use idioms::ports::Id;

fn ids(raw: &[u64]) -> Vec<Id<i32>> {
    raw.iter().map(|&r| Id::try_from(r).unwrap()).collect()
}

fn dispatch(command: Option<&Command>, ctx: &mut ServiceContext) -> Result<String, String> {
    let mut out = Vec::new();
    dispatch_with_context(command, ctx, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn demo_prints_replayed_id_first() {
    let mut ctx = ServiceContext::replaying(ids(&[17]));
    let transcript = dispatch(None, &mut ctx).unwrap();
    let lines: Vec<&str> = transcript.lines().collect();
    assert_eq!(
        lines,
        [
            "Generated ID for int object: 17",
            "Printing a concrete object",
            "Caught exception: Object not found!",
            "Caught exception: Invalid ID!",
        ]
    );
}

#[test]
fn replay_is_deterministic() {
    let first = dispatch(Some(&Command::Demo), &mut ServiceContext::replaying(ids(&[3]))).unwrap();
    let second = dispatch(Some(&Command::Demo), &mut ServiceContext::replaying(ids(&[3]))).unwrap();
    assert_eq!(first, second);
}

#[test]
fn ids_command_drains_replayed_ids() {
    let mut ctx = ServiceContext::replaying(ids(&[8, 9]));
    let command = Command::Ids { count: 2, format: OutputFormat::Text };
    assert_eq!(dispatch(Some(&command), &mut ctx).unwrap(), "8\n9\n");
    assert!(dispatch(Some(&command), &mut ctx).is_err());
}
