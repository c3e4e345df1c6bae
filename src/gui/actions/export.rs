// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out dir first (mutates app) before any &app borrows
    if app.out_dir_dirty {
        app.state.options.export.set_dir(&app.out_dir_text);
        logf!(
            "Export: Out dir set → {}",
            app.state.options.export.out_dir().display()
        );
        app.out_dir_dirty = false;
    }

    let Some(partition) = &app.results else {
        logd!("Export: Clicked, but nothing has been classified");
        app.status("Nothing to export (classify first)");
        return;
    };

    let words = app.word_list();

    logf!(
        "Export: Begin common={} rare={} words={}",
        partition.common.len(),
        partition.rare.len(),
        words.len()
    );

    match file::write_reports(&app.state.options.export, partition, &words) {
        Ok(paths) => {
            let last = paths.last().map(|p| p.display().to_string()).unwrap_or_default();
            logf!("Export: OK count={} last={}", paths.len(), last);
            app.status(format!("Exported {} file(s). Last: {}", paths.len(), last));
        }
        Err(e) => {
            loge!("Export: Error: {e}");
            app.status(format!("Export error: {e}"));
        }
    }
}
