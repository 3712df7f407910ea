use super::{warn_if_unsaved, CmdMessage, CmdResult, ThemeReport};
use crate::error::Result;
use crate::model::ThemeMode;
use crate::store::StorageBackend;
use crate::theme::ThemeStore;

fn report<B: StorageBackend>(store: &ThemeStore<B>, system_prefers_dark: bool) -> ThemeReport {
    ThemeReport {
        mode: store.mode(),
        appearance: store.resolved(system_prefers_dark),
    }
}

pub fn show<B: StorageBackend>(
    store: &ThemeStore<B>,
    system_prefers_dark: bool,
) -> Result<CmdResult> {
    Ok(CmdResult {
        theme: Some(report(store, system_prefers_dark)),
        ..Default::default()
    })
}

pub fn set<B: StorageBackend>(
    store: &mut ThemeStore<B>,
    mode: ThemeMode,
    system_prefers_dark: bool,
) -> Result<CmdResult> {
    store.set_mode(mode);
    let mut result = CmdResult {
        theme: Some(report(store, system_prefers_dark)),
        ..Default::default()
    }
    .with_message(CmdMessage::success(format!("Theme set to {}", mode)));
    warn_if_unsaved(store.persist_status(), &mut result);
    Ok(result)
}

pub fn toggle<B: StorageBackend>(
    store: &mut ThemeStore<B>,
    system_prefers_dark: bool,
) -> Result<CmdResult> {
    let mode = store.toggle_mode();
    let mut result = CmdResult {
        theme: Some(report(store, system_prefers_dark)),
        ..Default::default()
    }
    .with_message(CmdMessage::success(format!("Theme set to {}", mode)));
    warn_if_unsaved(store.persist_status(), &mut result);
    Ok(result)
}
