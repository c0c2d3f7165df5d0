use std::time::Duration;

use client_core::{
    render::{COLUMN_HEADERS, PAGE_HEADING},
    ListView,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, orchestration::dispatch_backend_command};

const ERROR_TEXT_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 80, 80);

pub struct PostBoardApp {
    // The backend worker stops once this sender is dropped.
    _cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    view: ListView,
    status: String,
}

impl PostBoardApp {
    /// Creates the app and queues its single startup fetch.
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut status = "Loading posts...".to_string();
        dispatch_backend_command(&cmd_tx, BackendCommand::FetchPosts, &mut status);
        Self {
            _cmd_tx: cmd_tx,
            ui_rx,
            view: ListView::new(),
            status,
        }
    }

    #[cfg(test)]
    pub fn view(&self) -> &ListView {
        &self.view
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    tracing::debug!(%message, "backend info");
                    if self.view.is_loading() {
                        self.status = format!("{message}; loading posts...");
                    }
                }
                UiEvent::PostsLoaded(outcome) => {
                    if !self.view.complete(outcome) {
                        continue;
                    }
                    self.status = match self.view.error_message() {
                        Some(message) => format!("Failed to load posts: {message}"),
                        None => format!("{} posts loaded", self.view.len()),
                    };
                }
                UiEvent::BackendFailed(reason) => {
                    tracing::error!(%reason, "backend worker failed");
                    self.status = reason;
                }
            }
        }
    }

    /// Reverses the table, as the `ID` header does.
    pub fn on_id_header_clicked(&mut self) {
        self.view.sort();
        tracing::debug!(rows = self.view.len(), "posts table reversed");
    }

    fn show_posts_table(&self, ui: &mut egui::Ui) -> bool {
        let [id_header, title_header, body_header] = COLUMN_HEADERS;
        let mut id_clicked = false;

        egui::ScrollArea::vertical()
            .id_salt("posts_table_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("posts_table")
                    .num_columns(3)
                    .striped(true)
                    .spacing(egui::vec2(16.0, 6.0))
                    .show(ui, |ui| {
                        id_clicked = ui
                            .button(egui::RichText::new(id_header).strong())
                            .on_hover_text("Reverse order")
                            .clicked();
                        ui.strong(title_header);
                        ui.strong(body_header);
                        ui.end_row();

                        for row in self.view.rows() {
                            ui.label(row.id.to_string());
                            ui.label(row.title);
                            ui.label(row.body);
                            ui.end_row();
                        }
                    });
            });

        id_clicked
    }
}

impl eframe::App for PostBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("status_strip").show(ctx, |ui| {
            ui.label(self.status());
        });

        let mut id_clicked = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(PAGE_HEADING);
            if self.view.is_loading() {
                ui.spinner();
            }
            if let Some(message) = self.view.error_message() {
                ui.colored_label(ERROR_TEXT_COLOR, message);
            }
            ui.add_space(8.0);
            id_clicked = self.show_posts_table(ui);
        });

        if id_clicked {
            self.on_id_header_clicked();
        }

        if self.view.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
