use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::ProgressRecord;
use crate::ui::terminal::TerminalRenderer;

/// Handle the `view` command: filter, compute and print one view.
pub fn handle(cmd: &Commands, cfg: &Config, records: &[ProgressRecord], color: bool) -> AppResult<()> {
    if let Commands::View { view, filters } = cmd {
        let selection = filters.selection(records, *view, cfg);
        let report = Core::render(records, &selection);

        print!("{}", TerminalRenderer::new(cfg, color).render(&report, &selection));
    }
    Ok(())
}
