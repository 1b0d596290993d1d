//! llm-dump: Process various content sources for LLM context

use anyhow::Result;

fn main() -> Result<()> {
    llm_dump::cli::run()
}
