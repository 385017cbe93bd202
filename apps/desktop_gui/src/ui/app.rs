use std::time::{Duration, Instant};

use chrono::{Datelike, Local};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use policy_core::{ContactForm, ContactFormHandler, NavigationController, SectionVisibility};
use shared::{
    catalog::{
        Block, Inline, ListItem, SectionContent, BRAND, CATALOG, COMPANY_DETAILS, PAGE_TITLE,
        SUPPORT_EMAIL, TAGLINE,
    },
    domain::{FormField, SECTIONS},
    error::ForwardingError,
    protocol::NotificationKind,
};
use tracing::warn;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::scroll::EguiScroller;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
const MUTED: egui::Color32 = egui::Color32::from_rgb(107, 114, 128);
const REQUIRED: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);

#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// Section to scroll to on the first frame.
    pub initial_section: Option<String>,
}

pub struct PolicyCenterApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    handler: ContactFormHandler,
    nav: NavigationController<EguiScroller>,
    form: ContactForm,
    last_updated: String,
    year: i32,
}

impl PolicyCenterApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        handler: ContactFormHandler,
        startup: StartupConfig,
    ) -> Self {
        let mut nav = NavigationController::new(EguiScroller::default());
        if let Some(section) = startup.initial_section.as_deref() {
            nav.select_section(section);
        }
        let today = Local::now().date_naive();
        Self {
            cmd_tx,
            ui_rx,
            handler,
            nav,
            form: ContactForm::default(),
            last_updated: today.format("%B %-d, %Y").to_string(),
            year: today.year(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::ContactForwarded(result) => self.form.finish_submit(result),
            }
        }
    }

    fn submit_contact(&mut self) {
        let Some(submission) = self.form.begin_submit(&self.handler) else {
            return;
        };
        if let Err(err) = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::ForwardContact { submission },
        ) {
            warn!(error = err.message(), "contact submission was not queued");
            self.form
                .finish_submit(Err(ForwardingError::new(err.message())));
        }
    }

    fn show_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            egui::Frame::NONE
                .fill(ACCENT)
                .corner_radius(12.0)
                .inner_margin(egui::Margin::symmetric(12, 6))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("V").strong().color(egui::Color32::WHITE));
                });
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(PAGE_TITLE).strong().size(18.0));
                ui.label(egui::RichText::new(TAGLINE).small().color(MUTED));
            });
            ui.add_space(16.0);
            for section in SECTIONS.iter() {
                let active = self.nav.is_active(section.id);
                if ui.selectable_label(active, section.label).clicked() {
                    self.nav.select(section.id);
                }
            }
        });
    }

    fn show_sections(&mut self, ui: &mut egui::Ui) -> Vec<SectionVisibility> {
        let viewport = ui.clip_rect();
        let mut visibility = Vec::with_capacity(CATALOG.len());

        for content in CATALOG.iter() {
            let response = egui::Frame::NONE
                .fill(ui.visuals().extreme_bg_color)
                .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
                .corner_radius(16.0)
                .inner_margin(egui::Margin::same(20))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    self.show_section(ui, content);
                })
                .response;

            if self.nav.scroller_mut().take_for(content.id).is_some() {
                response.scroll_to_me(Some(egui::Align::TOP));
            }
            let visible = response.rect.intersect(viewport);
            visibility.push(SectionVisibility {
                id: content.id,
                visible_extent: visible.height().max(0.0),
            });
            ui.add_space(24.0);
        }

        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(format!("© {} {BRAND}. All rights reserved.", self.year))
                    .color(MUTED),
            );
        });
        ui.add_space(24.0);
        visibility
    }

    fn show_section(&mut self, ui: &mut egui::Ui, content: &SectionContent) {
        ui.heading(content.title());
        ui.add_space(8.0);
        for block in content.blocks {
            match block {
                Block::Paragraph(spans) => show_inlines(ui, spans),
                Block::Heading(text) => {
                    ui.add_space(6.0);
                    ui.label(egui::RichText::new(*text).strong().size(15.0));
                }
                Block::List(items) => show_list(ui, items),
                Block::Note(text) => {
                    ui.label(egui::RichText::new(*text).small().color(MUTED));
                }
                Block::ContactPanel => self.show_contact_panel(ui),
            }
            ui.add_space(6.0);
        }
        ui.label(
            egui::RichText::new(format!("Last updated: {}", self.last_updated))
                .small()
                .color(MUTED),
        );
    }

    fn show_contact_panel(&mut self, ui: &mut egui::Ui) {
        ui.columns(2, |columns| {
            self.show_contact_form(&mut columns[0]);
            show_company_details(&mut columns[1]);
        });
    }

    fn show_contact_form(&mut self, ui: &mut egui::Ui) {
        let editable = !self.form.is_forwarding();
        self.field_label(ui, "Full Name", FormField::Name, true);
        ui.add_enabled(
            editable,
            egui::TextEdit::singleline(&mut self.form.fields.name)
                .hint_text("Your name")
                .desired_width(f32::INFINITY),
        );
        self.field_label(ui, "Email", FormField::Email, true);
        ui.add_enabled(
            editable,
            egui::TextEdit::singleline(&mut self.form.fields.email)
                .hint_text("you@example.com")
                .desired_width(f32::INFINITY),
        );
        self.field_label(ui, "Phone (optional)", FormField::Phone, false);
        ui.add_enabled(
            editable,
            egui::TextEdit::singleline(&mut self.form.fields.phone)
                .hint_text("+91-XXXXXXXXXX")
                .desired_width(f32::INFINITY),
        );
        self.field_label(ui, "Message", FormField::Message, true);
        ui.add_enabled(
            editable,
            egui::TextEdit::multiline(&mut self.form.fields.message)
                .hint_text("How can we help?")
                .desired_rows(5)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        let forwarding = self.form.is_forwarding();
        let caption = if forwarding { "Sending…" } else { "Send Message" };
        if ui
            .add_enabled(!forwarding, egui::Button::new(caption))
            .clicked()
        {
            self.submit_contact();
        }

        ui.add_space(8.0);
        self.show_status_banner(ui);
    }

    fn field_label(&self, ui: &mut egui::Ui, text: &str, field: FormField, required: bool) {
        ui.horizontal(|ui| {
            let label = egui::RichText::new(text).strong();
            if self.form.is_cited(field) {
                ui.label(label.color(REQUIRED));
            } else {
                ui.label(label);
            }
            if required {
                ui.label(egui::RichText::new("*").color(REQUIRED));
            }
        });
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let Some(notification) = self.form.notification().cloned() else {
            return;
        };
        let retryable = self
            .form
            .rejection()
            .map(UiError::from_form_error)
            .is_some_and(|error| error.is_retryable());
        let (fill, stroke) = match notification.kind {
            NotificationKind::Success => (
                egui::Color32::from_rgb(22, 101, 52),
                egui::Stroke::new(1.0, egui::Color32::from_rgb(74, 163, 108)),
            ),
            NotificationKind::Error => (
                egui::Color32::from_rgb(111, 53, 53),
                egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
            ),
        };

        egui::Frame::NONE
            .fill(fill)
            .stroke(stroke)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new(&notification.message).color(egui::Color32::WHITE),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.form.dismiss_notification();
                        }
                        if retryable && ui.button("Retry").clicked() {
                            self.submit_contact();
                        }
                    });
                });
            });
    }
}

impl eframe::App for PolicyCenterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::top("policy_header")
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(12)),
            )
            .show(ctx, |ui| self.show_header(ui));

        let visibility = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.set_max_width(960.0);
                        self.show_sections(ui)
                    })
                    .inner
            })
            .inner;

        let now = Instant::now();
        if self.nav.scroller().sync_allowed(now) {
            self.nav.sync_with_viewport(&visibility);
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
        if self.form.is_forwarding() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

fn show_inlines(ui: &mut egui::Ui, spans: &[Inline]) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for span in spans {
            show_span(ui, span);
        }
    });
}

fn show_list(ui: &mut egui::Ui, items: &[ListItem]) {
    for item in items {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.label("•  ");
            if let Some(lead) = item.lead {
                ui.label(egui::RichText::new(format!("{lead} ")).strong());
            }
            for span in item.body {
                show_span(ui, span);
            }
        });
    }
}

fn show_span(ui: &mut egui::Ui, span: &Inline) {
    match span {
        Inline::Text(text) => {
            ui.label(*text);
        }
        Inline::Strong(text) => {
            ui.label(egui::RichText::new(*text).strong());
        }
        Inline::Emphasis(text) => {
            ui.label(egui::RichText::new(*text).italics());
        }
        Inline::SupportEmail => {
            ui.hyperlink_to(SUPPORT_EMAIL, format!("mailto:{SUPPORT_EMAIL}"));
        }
    }
}

fn show_company_details(ui: &mut egui::Ui) {
    egui::Frame::group(ui.style())
        .corner_radius(16.0)
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Company Details").strong());
            ui.add_space(6.0);
            for detail in COMPANY_DETAILS.iter() {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(format!("{}:", detail.label)).strong());
                    ui.label(detail.value);
                });
            }
        });
}
