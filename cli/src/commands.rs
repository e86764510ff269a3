use roster_core::{GalleryState, PointerTarget};
use std::fmt::Write;

use crate::CliContext;

// ─────────────────────────────────────────────────────────────────────────────
// Rendering
// ─────────────────────────────────────────────────────────────────────────────

/// Nav list: one line per group with its size, selected group marked.
pub fn render_groups(state: &GalleryState) -> String {
    let catalog = state.catalog();
    if catalog.groups().is_empty() {
        return "No groups available\n".to_string();
    }

    let selected = state.filter().selected_role();
    let mut out = String::new();
    for group in catalog.groups() {
        let is_selected = match selected {
            Some(role) => role == group.key,
            None => group.key == roster_core::ALL_GROUP,
        };
        let marker = if is_selected { "*" } else { " " };
        let _ = writeln!(out, "{marker} {:<20} {}", group.key, group.members.len());
    }
    out
}

/// Visible thumbnails with the running total.
pub fn render_list(state: &GalleryState) -> String {
    let visible = state.visible();
    let mut out = format!("Total Hero: {}\n", visible.len());
    for (_, record) in &visible {
        let _ = writeln!(out, "  {:<20} {}", record.display_name, record.role);
    }
    out
}

/// Detail view of the open record, or a note that nothing is open.
pub fn render_popup(state: &GalleryState) -> String {
    let Some(selection) = state.selected() else {
        return "No record open\n".to_string();
    };
    let record = selection.record;
    let active = selection.active_ability.map(|(i, _)| i);

    let mut out = String::new();
    let _ = writeln!(out, "{}", record.display_name);
    let _ = writeln!(out, "Role: {}", record.role);
    if !record.description.is_empty() {
        let _ = writeln!(out, "{}", record.description);
    }
    for (idx, ability) in record.abilities.iter().enumerate() {
        if active == Some(idx) {
            let _ = writeln!(out, "  [-] {}", ability.display_name);
            let _ = writeln!(out, "      {}", ability.description);
        } else {
            let _ = writeln!(out, "  [+] {}", ability.display_name);
        }
    }
    let _ = writeln!(out, "Video: {}", state.video_embed_url(record));
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Commands
// ─────────────────────────────────────────────────────────────────────────────

pub async fn list_groups(ctx: &CliContext) {
    print!("{}", render_groups(&*ctx.gallery.read().await));
}

pub async fn list(ctx: &CliContext) {
    print!("{}", render_list(&*ctx.gallery.read().await));
}

pub async fn select_group(ctx: &CliContext, name: &str) {
    let mut state = ctx.gallery.write().await;
    if state.catalog().group(name).is_none() {
        println!("Unknown group: {name}");
        return;
    }
    state.select_group(name);
    print!("{}", render_list(&state));
}

pub async fn search(ctx: &CliContext, query: &str) {
    let mut state = ctx.gallery.write().await;
    state.set_query(query);
    print!("{}", render_list(&state));
}

/// The search button: filtering is already live, so this only logs.
pub async fn find(ctx: &CliContext) {
    ctx.gallery.read().await.search();
}

pub async fn open(ctx: &CliContext, name: &str) {
    let mut state = ctx.gallery.write().await;
    // A click on a thumbnail first lands as a pointer-down outside any open popup
    state.pointer_down(PointerTarget::Outside);
    if state.open_by_name(name) {
        print!("{}", render_popup(&state));
    } else {
        println!("No visible record named {name}");
    }
}

pub async fn toggle_ability(ctx: &CliContext, name: &str) {
    let mut state = ctx.gallery.write().await;
    if !state.popup().is_open() {
        println!("No record open");
        return;
    }
    if state.toggle_ability_by_name(name) {
        print!("{}", render_popup(&state));
    } else {
        println!("No ability named {name}");
    }
}

pub async fn close(ctx: &CliContext) {
    ctx.gallery.write().await.close();
}

pub async fn click_outside(ctx: &CliContext) {
    ctx.gallery.write().await.pointer_down(PointerTarget::Outside);
}

pub async fn show(ctx: &CliContext) {
    print!("{}", render_popup(&*ctx.gallery.read().await));
}

pub fn exit() {
    println!("quitting...");
}
