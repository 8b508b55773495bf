// Interactive session and one-shot mode.
//
// Following the same pattern as the page itself:
// 1. Read one line of input
// 2. Call the page controller (or link copier)
// 3. Print the resulting page
//
// Submissions run on their own task so the prompt stays usable while a
// request is pending. The controller decides whether a submission counts.
// The loop does not return until every spawned submission has finished.

use std::io::Write as _;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;

use super::commands::{parse_command, Command, HELP_TEXT};
use super::page_view::{render_header, render_page};
use crate::core::export::{ExportError, ExportSink};
use crate::core::extraction::{DriveFile, ExtractionClient};
use crate::core::links::{ClipboardWriter, LinkCopier};
use crate::core::page::{ExportOutcome, PageController, PageSnapshot, SubmitOutcome};

pub struct Session<C: ExtractionClient, S: ExportSink, W: ClipboardWriter> {
    page: Arc<PageController<C, S>>,
    copier: Arc<LinkCopier<W>>,
}

impl<C, S, W> Session<C, S, W>
where
    C: ExtractionClient + 'static,
    S: ExportSink + 'static,
    W: ClipboardWriter + 'static,
{
    pub fn new(page: PageController<C, S>, copier: LinkCopier<W>) -> Self {
        Self {
            page: Arc::new(page),
            copier: Arc::new(copier),
        }
    }

    fn render(page: &PageSnapshot, copier: &LinkCopier<W>) -> String {
        render_page(page, &|link: &str, default: &'static str| {
            copier.label(link, default)
        })
    }

    /// Submit once, print the page, optionally export. Returns whether the
    /// extraction succeeded.
    pub async fn run_once(&self, folder: &str, export: bool) -> anyhow::Result<bool> {
        let outcome = self.page.submit(folder).await;
        let snapshot = self.page.snapshot().await;
        print!("{}", Self::render(&snapshot, &self.copier));

        let ok = match outcome {
            SubmitOutcome::Extracted { file_count } => {
                tracing::debug!(file_count, "One-shot extraction done");
                true
            }
            _ => false,
        };
        if ok && export {
            println!("{}", export_message(self.page.export().await));
        }
        Ok(ok)
    }

    /// Read commands from stdin until `quit` or end of input.
    pub async fn run_interactive(&self) -> anyhow::Result<()> {
        println!("{}", render_header());
        println!("Type `help` for commands.");
        self.run_lines(BufReader::new(tokio::io::stdin())).await
    }

    /// Command loop over any line source. Submissions still in flight when
    /// the input ends are awaited, so their results are always applied.
    async fn run_lines<R>(&self, input: R) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut submissions = JoinSet::new();
        let mut lines = input.lines();
        loop {
            print!("> ");
            std::io::stdout().flush().context("Failed to flush stdout")?;

            let Some(line) = lines.next_line().await.context("Failed to read input")? else {
                break;
            };

            // Reap finished submissions
            while submissions.try_join_next().is_some() {}

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            };

            match command {
                Command::Quit => break,
                Command::Help => println!("{}", HELP_TEXT),
                Command::List => {
                    let snapshot = self.page.snapshot().await;
                    print!("{}", Self::render(&snapshot, &self.copier));
                }
                Command::Export => println!("{}", export_message(self.page.export().await)),
                Command::View(n) => match self.file_at(n).await {
                    Ok(file) => println!("{}", file.view_url),
                    Err(msg) => println!("{}", msg),
                },
                Command::Download(n) => match self.file_at(n).await {
                    Ok(file) => println!("{}", file.download_url),
                    Err(msg) => println!("{}", msg),
                },
                Command::Copy(n) => match self.file_at(n).await {
                    Ok(file) => {
                        // Failures are silent: no "Copied!" and no error line
                        if self.copier.copy(&file.view_url).await {
                            println!("Copied!");
                        }
                    }
                    Err(msg) => println!("{}", msg),
                },
                Command::Submit(text) => self.spawn_submit(&mut submissions, text),
            }
        }

        if !submissions.is_empty() {
            tracing::debug!(pending = submissions.len(), "Waiting for pending extraction");
        }
        while let Some(joined) = submissions.join_next().await {
            if let Err(e) = joined {
                tracing::error!("Submission task failed: {}", e);
            }
        }

        Ok(())
    }

    fn spawn_submit(&self, submissions: &mut JoinSet<()>, text: String) {
        let page = Arc::clone(&self.page);
        let copier = Arc::clone(&self.copier);
        submissions.spawn(async move {
            match page.submit(&text).await {
                SubmitOutcome::Ignored => {
                    println!("An extraction is already in progress; submission ignored.");
                }
                _ => {
                    let snapshot = page.snapshot().await;
                    print!("\n{}", Self::render(&snapshot, &copier));
                    print!("> ");
                    let _ = std::io::stdout().flush();
                }
            }
        });
    }

    async fn file_at(&self, n: usize) -> Result<DriveFile, String> {
        let snapshot = self.page.snapshot().await;
        file_at(&snapshot, n).cloned()
    }
}

/// Look up a 1-based row.
fn file_at(page: &PageSnapshot, n: usize) -> Result<&DriveFile, String> {
    if page.files.is_empty() {
        return Err("No files yet. Paste a folder link first.".to_string());
    }
    n.checked_sub(1)
        .and_then(|i| page.files.get(i))
        .ok_or_else(|| format!("No file #{}. The list has {} file(s).", n, page.files.len()))
}

fn export_message(result: Result<ExportOutcome, ExportError>) -> String {
    match result {
        Ok(ExportOutcome::Saved(path)) => format!("Saved {}", path.display()),
        Ok(ExportOutcome::Disabled) => "Nothing to export yet.".to_string(),
        Err(e) => {
            tracing::error!("Export failed: {}", e);
            e.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::ExportDocument;
    use crate::core::extraction::extraction_models::ExtractSource;
    use crate::core::extraction::{ExtractFilesResponse, ExtractionError};
    use crate::core::links::ClipboardError;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use std::time::Duration;

    const LINK: &str = "https://drive.google.com/drive/folders/ABC123";

    /// Backend that takes a second to answer every request.
    struct SlowClient {
        inputs: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl ExtractionClient for SlowClient {
        async fn extract(
            &self,
            folder_input: &str,
        ) -> Result<ExtractFilesResponse, ExtractionError> {
            self.inputs.lock().unwrap().push(folder_input.to_string());
            tokio::time::sleep(Duration::from_secs(1)).await;
            Ok(ExtractFilesResponse {
                folder_id: "ABC123".to_string(),
                source: ExtractSource::Public,
                files: page_with(1).files,
                message: None,
            })
        }
    }

    struct RecordingSink {
        saved: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl ExportSink for RecordingSink {
        async fn save(&self, document: &ExportDocument) -> Result<PathBuf, ExportError> {
            self.saved.lock().unwrap().push(document.contents.clone());
            Ok(PathBuf::from(document.file_name))
        }
    }

    struct RecordingClipboard {
        texts: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl ClipboardWriter for RecordingClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            self.texts.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct Recorded {
        inputs: Arc<Mutex<Vec<String>>>,
        saved: Arc<Mutex<Vec<String>>>,
        copied: Arc<Mutex<Vec<String>>>,
    }

    fn session() -> (Session<SlowClient, RecordingSink, RecordingClipboard>, Recorded) {
        let recorded = Recorded {
            inputs: Arc::default(),
            saved: Arc::default(),
            copied: Arc::default(),
        };
        let page = PageController::new(
            SlowClient {
                inputs: Arc::clone(&recorded.inputs),
            },
            RecordingSink {
                saved: Arc::clone(&recorded.saved),
            },
        );
        let copier = LinkCopier::new(RecordingClipboard {
            texts: Arc::clone(&recorded.copied),
        });
        (Session::new(page, copier), recorded)
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_submission_finishes_after_input_ends() {
        let (session, recorded) = session();
        let input = format!("{}\n", LINK);

        session.run_lines(input.as_bytes()).await.unwrap();

        let snapshot = session.page.snapshot().await;
        assert!(!snapshot.loading);
        assert_eq!(snapshot.folder_id.as_deref(), Some("ABC123"));
        assert_eq!(snapshot.files.len(), 1);
        assert_eq!(recorded.inputs.lock().unwrap().as_slice(), [LINK]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_stops_reading_but_keeps_pending_submission() {
        let (session, recorded) = session();
        let input = format!("help\n{}\nquit\nsecond-folder\n", LINK);

        session.run_lines(input.as_bytes()).await.unwrap();

        assert_eq!(recorded.inputs.lock().unwrap().as_slice(), [LINK]);
        let snapshot = session.page.snapshot().await;
        assert_eq!(snapshot.folder_id.as_deref(), Some("ABC123"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_and_export_use_current_results() {
        let (session, recorded) = session();
        session
            .run_lines(format!("{}\n", LINK).as_bytes())
            .await
            .unwrap();

        session
            .run_lines(&b"copy 1\nexport\nview 9\n"[..])
            .await
            .unwrap();

        assert_eq!(
            recorded.copied.lock().unwrap().as_slice(),
            ["https://x/view/0"]
        );
        let saved = recorded.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert!(saved[0].contains("file0.txt"));
        assert!(session.copier.is_copied("https://x/view/0"));
    }

    fn page_with(count: usize) -> PageSnapshot {
        PageSnapshot {
            folder_id: Some("F".to_string()),
            files: (0..count)
                .map(|i| DriveFile {
                    id: i.to_string(),
                    name: format!("file{}.txt", i),
                    mime_type: "text/plain".to_string(),
                    view_url: format!("https://x/view/{}", i),
                    download_url: format!("https://x/dl/{}", i),
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_file_at_is_one_based() {
        let page = page_with(2);
        assert_eq!(file_at(&page, 1).unwrap().id, "0");
        assert_eq!(file_at(&page, 2).unwrap().id, "1");
        assert_eq!(
            file_at(&page, 3).unwrap_err(),
            "No file #3. The list has 2 file(s)."
        );
        assert!(file_at(&page, 0).is_err());
    }

    #[test]
    fn test_file_at_without_results() {
        assert_eq!(
            file_at(&page_with(0), 1).unwrap_err(),
            "No files yet. Paste a folder link first."
        );
    }

    #[test]
    fn test_export_messages() {
        assert_eq!(
            export_message(Ok(ExportOutcome::Saved(PathBuf::from("out/drive-files.xls")))),
            "Saved out/drive-files.xls"
        );
        assert_eq!(
            export_message(Ok(ExportOutcome::Disabled)),
            "Nothing to export yet."
        );
        assert_eq!(
            export_message(Err(ExportError::Write("disk full".to_string()))),
            "Failed to write export file: disk full"
        );
    }
}
