use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Frame;
use tokio::sync::mpsc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

use crate::config::{AnalysisMode, AppConfig};
use crate::internal::catalog::Recommendation;
use crate::internal::export;
use crate::internal::notification::Notification;
use crate::internal::pipeline::{AnalysisEvent, Phase};
use crate::internal::sampler;
use crate::internal::upload::{self, UploadCandidate, UploadState};
use crate::internal::ui::view;

/// Input modes for the UI.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InputMode {
    Normal,
    PathEntry,
}

/// Actions/messages sent through the app action channel.
#[derive(Debug, Clone)]
pub enum Action {
    Quit,
    ChooseFile,
    SelectFile(PathBuf),
    ImageAccepted {
        path: PathBuf,
        media_type: String,
        size: u64,
        data_url: String,
    },
    UploadFailed(String),
    StartAnalysis,
    AnalysisStep(String),
    AnalysisComplete,
    ExportResults,
}

/// Metadata shown in the preview panel once an image is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewMeta {
    pub file_name: String,
    pub media_type: String,
    pub size_bytes: u64,
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub app_version: String,
    pub config: AppConfig,
    pub phase: Phase,
    pub input_mode: InputMode,
    pub path_input: String,
    pub upload: UploadState,
    pub preview: Option<PreviewMeta>,
    pub loading_label: Option<String>,
    pub results: Vec<Recommendation>,
    pub notification: Option<Notification>,
    analysis_cancel: Option<CancellationToken>,
    pub action_tx: UnboundedSender<Action>,
    pub action_rx: UnboundedReceiver<Action>,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(AppConfig::load())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            running: true,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            config,
            phase: Phase::Idle,
            input_mode: InputMode::Normal,
            path_input: String::new(),
            upload: UploadState::default(),
            preview: None,
            loading_label: None,
            results: Vec::new(),
            notification: None,
            analysis_cancel: None,
            action_tx,
            action_rx,
        }
    }

    /// Set a success notification
    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification::success(message));
    }

    /// Set an error notification
    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification::error(message));
    }

    /// Drop the notification once its display and fade windows have passed.
    pub fn tick(&mut self) {
        if let Some(n) = &self.notification
            && n.is_expired()
        {
            self.notification = None;
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Normal => match key.code {
                KeyCode::Char('q') => {
                    let _ = self.action_tx.send(Action::Quit);
                }
                KeyCode::Char('o') => {
                    let _ = self.action_tx.send(Action::ChooseFile);
                }
                KeyCode::Char('a') => {
                    let _ = self.action_tx.send(Action::StartAnalysis);
                }
                KeyCode::Char('e') => {
                    let _ = self.action_tx.send(Action::ExportResults);
                }
                _ => {}
            },
            InputMode::PathEntry => match key.code {
                KeyCode::Esc => {
                    self.input_mode = InputMode::Normal;
                    self.path_input.clear();
                }
                KeyCode::Enter => {
                    let path = self.path_input.trim().to_string();
                    self.input_mode = InputMode::Normal;
                    self.path_input.clear();
                    if !path.is_empty() {
                        let _ = self.action_tx.send(Action::SelectFile(PathBuf::from(path)));
                    }
                }
                KeyCode::Backspace => {
                    self.path_input.pop();
                }
                KeyCode::Char(c) => {
                    self.path_input.push(c);
                }
                _ => {}
            },
        }
    }

    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.running = false;
            }
            Action::ChooseFile => {
                self.input_mode = InputMode::PathEntry;
                self.path_input.clear();
                if self.phase == Phase::Idle {
                    self.phase = Phase::ImagePending;
                }
            }
            Action::SelectFile(path) => self.on_select_file(path),
            Action::ImageAccepted {
                path,
                media_type,
                size,
                data_url,
            } => self.on_image_accepted(path, media_type, size, data_url),
            Action::UploadFailed(message) => {
                tracing::warn!("upload failed: {}", message);
                self.notify_error(message);
                self.phase = Phase::ImagePending;
            }
            Action::StartAnalysis => self.on_start_analysis(),
            Action::AnalysisStep(label) => {
                self.loading_label = Some(label);
            }
            Action::AnalysisComplete => self.on_analysis_complete(),
            Action::ExportResults => self.on_export_results(),
        }
    }

    fn on_select_file(&mut self, path: PathBuf) {
        // A new selection supersedes whatever was in flight.
        if let Some(cancel) = self.analysis_cancel.take() {
            cancel.cancel();
            self.loading_label = None;
        }
        self.phase = Phase::ImagePending;

        let candidate = match UploadCandidate::from_path(&path) {
            Ok(candidate) => candidate,
            Err(e) => {
                tracing::warn!(path = %path.display(), "rejected selection: {}", e);
                self.notify_error(e.to_string());
                self.restore_phase_after_rejection();
                return;
            }
        };

        if let Err(e) = candidate.validate(self.config.max_upload_bytes) {
            tracing::warn!(path = %path.display(), size = candidate.size, "rejected selection: {}", e);
            self.notify_error(e.to_string());
            self.restore_phase_after_rejection();
            return;
        }

        let Some(media_type) = candidate.media_type.clone() else {
            // validate() guarantees a media type; treat a miss as a rejection.
            self.notify_error(upload::UploadError::InvalidFileType.to_string());
            self.restore_phase_after_rejection();
            return;
        };

        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            match upload::read_as_data_url(&candidate.path, &media_type).await {
                Ok(data_url) => {
                    let _ = tx.send(Action::ImageAccepted {
                        path: candidate.path,
                        media_type,
                        size: candidate.size,
                        data_url,
                    });
                }
                Err(e) => {
                    let _ = tx.send(Action::UploadFailed(format!("{:#}", e)));
                }
            }
        });
    }

    fn restore_phase_after_rejection(&mut self) {
        // Rejection is non-fatal: keep the previous preview if there was one,
        // otherwise stay waiting for a selection.
        self.phase = if self.upload.has_preview() {
            Phase::Previewing
        } else {
            Phase::ImagePending
        };
    }

    fn on_image_accepted(&mut self, path: PathBuf, media_type: String, size: u64, data_url: String) {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        tracing::info!(file = %file_name, %media_type, size, "image accepted");

        self.upload = UploadState::accepted(path, data_url);
        self.preview = Some(PreviewMeta {
            file_name,
            media_type,
            size_bytes: size,
        });
        self.results.clear();
        self.phase = Phase::Previewing;
        self.notify_success("Image uploaded successfully!");

        if self.config.auto_analyze() {
            let _ = self.action_tx.send(Action::StartAnalysis);
        }
    }

    fn on_start_analysis(&mut self) {
        // Analyze only makes sense with an accepted preview, once at a time.
        if !self.upload.has_preview() || self.phase == Phase::Analyzing {
            return;
        }

        self.phase = Phase::Analyzing;
        self.results.clear();
        self.loading_label = Some("Analyzing your style...".to_string());

        let cancel = CancellationToken::new();
        self.analysis_cancel = Some(cancel.clone());

        let (ev_tx, mut ev_rx) = mpsc::unbounded_channel();
        tokio::spawn(self.config.analysis_script().run(ev_tx, cancel));

        let action_tx = self.action_tx.clone();
        tokio::spawn(async move {
            while let Some(event) = ev_rx.recv().await {
                let action = match event {
                    AnalysisEvent::Step(label) => Action::AnalysisStep(label),
                    AnalysisEvent::Done => Action::AnalysisComplete,
                };
                if action_tx.send(action).is_err() {
                    break;
                }
            }
        });
    }

    fn on_analysis_complete(&mut self) {
        self.analysis_cancel = None;
        self.loading_label = None;

        self.results = match self.config.analysis_mode {
            AnalysisMode::Guided => {
                let mut rng = sampler::sampling_rng(self.config.sample_seed);
                sampler::sample_without_replacement(self.config.catalog(), self.config.picks, &mut rng)
            }
            AnalysisMode::Instant => self.config.catalog().to_vec(),
        };

        self.phase = Phase::ShowingResults;
        self.notify_success("Style analysis complete!");
    }

    fn on_export_results(&mut self) {
        if self.results.is_empty() {
            self.notify_error("Nothing to export yet.");
            return;
        }

        let path = PathBuf::from(&self.config.export_path);
        match export::write_report(&path, &self.results) {
            Ok(written) => {
                self.notify_success(format!("Results exported to {}", written.display()));
                if self.config.open_after_export
                    && let Err(e) = open::that(&written)
                {
                    tracing::warn!("failed to open {}: {}", written.display(), e);
                }
            }
            Err(e) => {
                self.notify_error(format!("{:#}", e));
            }
        }
    }

    fn ui(&mut self, f: &mut Frame) {
        view::draw(self, f);
    }

    pub async fn run(&mut self, mut tui: crate::tui::Tui) -> Result<()> {
        let mut event_interval = tokio::time::interval(Duration::from_millis(16));

        loop {
            self.tick();
            tui.draw(|f| self.ui(f))?;

            tokio::select! {
                _ = event_interval.tick() => {
                    // Check for terminal events
                    if event::poll(Duration::from_millis(0))?
                        && let Event::Key(key) = event::read()?
                            && key.kind == KeyEventKind::Press {
                                self.handle_key_event(key);
                            }
                }
                Some(action) = self.action_rx.recv() => {
                    self.update(action);
                }
            }

            if !self.running {
                break;
            }
        }

        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
