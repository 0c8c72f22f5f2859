use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::ProgressRecord;

pub fn handle(cmd: &Commands, cfg: &Config, records: &[ProgressRecord]) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        view,
        filters,
        force,
    } = cmd
    {
        let selection = filters.selection(records, *view, cfg);
        ExportLogic::export(records, &selection, cfg, *format, file, *force)?;
    }
    Ok(())
}
