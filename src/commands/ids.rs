//! `idioms ids` command.

use std::io::Write;

use serde::ser::{SerializeSeq, Serializer as _};
use serde::Serialize;

use super::write_error;
use crate::cli::OutputFormat;
use crate::context::ServiceContext;

/// One generated identifier in JSON output.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct IdRecord {
    /// Object kind the identifier belongs to.
    pub kind: &'static str,
    /// Raw identifier value.
    pub id: u64,
}

/// Execute the `ids` command.
///
/// Draws `count` identifiers from the context's generator and writes each
/// one as soon as it is produced. Output already written stays written if
/// the generator runs dry part way through.
///
/// # Errors
///
/// Returns an error string if the generator is exhausted or `out` fails.
pub fn run(
    ctx: &mut ServiceContext,
    out: &mut dyn Write,
    count: u64,
    format: OutputFormat,
) -> Result<(), String> {
    match format {
        OutputFormat::Text => {
            for _ in 0..count {
                let record = next_record(ctx)?;
                writeln!(out, "{}", record.id).map_err(write_error)?;
            }
        }
        OutputFormat::Json => {
            let mut serializer = serde_json::Serializer::new(&mut *out);
            let len = usize::try_from(count).ok();
            let mut seq = serializer.serialize_seq(len).map_err(json_error)?;
            for _ in 0..count {
                let record = next_record(ctx)?;
                seq.serialize_element(&record).map_err(json_error)?;
            }
            seq.end().map_err(json_error)?;
            writeln!(out).map_err(write_error)?;
        }
    }
    Ok(())
}

fn next_record(ctx: &mut ServiceContext) -> Result<IdRecord, String> {
    ctx.id_gen
        .next_id()
        .map(|id| IdRecord { kind: "int", id: id.get() })
        .map_err(|e| format!("Failed to generate id: {e}"))
}

fn json_error(err: serde_json::Error) -> String {
    format!("Failed to serialize ids: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::Id;

    fn run_to_string(ctx: &mut ServiceContext, count: u64, format: OutputFormat) -> String {
        let mut out = Vec::new();
        run(ctx, &mut out, count, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_lists_sequential_ids() {
        let mut ctx = ServiceContext::live();
        assert_eq!(run_to_string(&mut ctx, 3, OutputFormat::Text), "1\n2\n3\n");
    }

    #[test]
    fn json_lists_records() {
        let mut ctx = ServiceContext::live();
        assert_eq!(
            run_to_string(&mut ctx, 2, OutputFormat::Json),
            "[{\"kind\":\"int\",\"id\":1},{\"kind\":\"int\",\"id\":2}]\n"
        );
    }

    #[test]
    fn zero_count_prints_nothing_or_empty_array() {
        let mut ctx = ServiceContext::live();
        assert_eq!(run_to_string(&mut ctx, 0, OutputFormat::Text), "");
        assert_eq!(run_to_string(&mut ctx, 0, OutputFormat::Json), "[]\n");
    }

    #[test]
    fn exhaustion_keeps_ids_already_written() {
        let mut ctx = ServiceContext::replaying([Id::try_from(5).unwrap()]);
        let mut out = Vec::new();
        let err = run(&mut ctx, &mut out, 2, OutputFormat::Text).unwrap_err();
        assert!(err.contains("exhausted"));
        assert_eq!(out, b"5\n");
    }

    /// Sink that fails once more than `limit` bytes have been written.
    struct Capped {
        written: usize,
        limit: usize,
    }

    impl Write for Capped {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.written + buf.len() > self.limit {
                return Err(std::io::Error::other("sink full"));
            }
            self.written += buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn text_output_streams_before_the_run_finishes() {
        let mut ctx = ServiceContext::live();
        let mut sink = Capped { written: 0, limit: 64 };
        let err = run(&mut ctx, &mut sink, crate::cli::MAX_IDS, OutputFormat::Text).unwrap_err();
        assert!(err.contains("sink full"));
        assert!(sink.written > 0);
        let drawn = ctx.id_gen.next_id().unwrap().get();
        assert!(drawn < 100, "generator ran ahead of the sink: {drawn}");
    }

    #[test]
    fn json_output_streams_before_the_run_finishes() {
        let mut ctx = ServiceContext::live();
        let mut sink = Capped { written: 0, limit: 256 };
        let err = run(&mut ctx, &mut sink, crate::cli::MAX_IDS, OutputFormat::Json).unwrap_err();
        assert!(err.contains("sink full"));
        let drawn = ctx.id_gen.next_id().unwrap().get();
        assert!(drawn < 100, "generator ran ahead of the sink: {drawn}");
    }
}
