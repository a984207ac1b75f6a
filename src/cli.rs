use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;

use crate::proxy;
use crate::upstream::Fetcher;

/// One-shot lookup for the command line. The envelope goes to `out`; a
/// rejected or failed lookup writes its error body to `err` and yields a
/// failure exit code.
pub async fn run_lookup<F: Fetcher>(
    fetcher: &F,
    query: &str,
    no_html: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<ExitCode> {
    match proxy::lookup(fetcher, Some(query)).await {
        Ok(result) => {
            if no_html {
                serde_json::to_writer_pretty(&mut *out, &result.summary())?;
            } else {
                serde_json::to_writer_pretty(&mut *out, &result)?;
            }
            writeln!(out)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            serde_json::to_writer_pretty(&mut *err, &e.body())?;
            writeln!(err)?;
            Ok(ExitCode::FAILURE)
        }
    }
}
