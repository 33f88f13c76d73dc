use super::fetch::{FetchClient, LineSplitter, validate_url};
use super::types::{IngestReport, SourceKind};
use crate::error::{Result, WordCounterError};
use crate::normalizer::tokenizer::normalize;
use crate::storage::store::{CounterStore, Session};

use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Drives the normalizer over a text source and folds the tokens into one store session.
pub struct IngestionPipeline {
    store: Arc<CounterStore>,
    fetcher: FetchClient,
}

impl IngestionPipeline {
    pub fn new(store: Arc<CounterStore>, fetcher: FetchClient) -> Arc<Self> {
        Arc::new(Self { store, fetcher })
    }

    /// Ingests `source_data` according to the wire name of its kind
    /// (`"string"`, `"file"` or `"url"`).
    pub async fn ingest(&self, source_type: &str, source_data: &str) -> Result<IngestReport> {
        let kind: SourceKind = source_type.parse()?;
        self.ingest_source(kind, source_data).await
    }

    async fn ingest_source(&self, kind: SourceKind, source_data: &str) -> Result<IngestReport> {
        let report = match kind {
            SourceKind::Inline => self.ingest_inline(source_data).await?,
            SourceKind::File => self.ingest_file(Path::new(source_data)).await?,
            SourceKind::Url => self.ingest_url(source_data).await?,
        };

        tracing::info!(
            "Ingested {} source: {} lines, {} tokens",
            kind,
            report.lines,
            report.tokens
        );
        Ok(report)
    }

    async fn ingest_inline(&self, text: &str) -> Result<IngestReport> {
        let mut session = self.store.open();
        let mut report = IngestReport::default();

        fold_line(&mut session, &mut report, text);

        persist(session).await?;
        Ok(report)
    }

    async fn ingest_file(&self, path: &Path) -> Result<IngestReport> {
        let opened = tokio::fs::File::open(path).await.map(BufReader::new);
        self.ingest_buffered(&path.display().to_string(), opened).await
    }

    /// Streams a local reader line by line.
    ///
    /// The session is persisted whether or not reading succeeds, so lines folded before an
    /// I/O failure are kept. A failing persist takes precedence over the read error.
    pub(crate) async fn ingest_buffered<R>(
        &self,
        origin: &str,
        opened: std::io::Result<R>,
    ) -> Result<IngestReport>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut session = self.store.open();
        let mut report = IngestReport::default();

        let read_result = match opened {
            Ok(reader) => fold_reader(&mut session, &mut report, reader).await,
            Err(e) => Err(e),
        };

        persist(session).await?;

        if let Err(e) = read_result {
            tracing::warn!(
                "Failed to read {} after {} lines: {}",
                origin,
                report.lines,
                e
            );
            return Err(WordCounterError::unreachable(
                SourceKind::File,
                format!("{}: {}", origin, e),
            ));
        }

        Ok(report)
    }

    /// Fetches a remote text body. Nothing is persisted when the fetch fails.
    async fn ingest_url(&self, raw_url: &str) -> Result<IngestReport> {
        let url = validate_url(raw_url)?;

        let mut session = self.store.open();
        let mut report = IngestReport::default();

        self.fetcher
            .for_each_line(&url, |line| fold_line(&mut session, &mut report, line))
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch {}: {}", url, e))?;

        persist(session).await?;
        Ok(report)
    }
}

fn fold_line(session: &mut Session, report: &mut IngestReport, line: &str) {
    for token in normalize(line) {
        session.increment(&token);
        report.tokens += 1;
    }
    report.lines += 1;
}

/// Splits lines the same way URL bodies are split. Lines completed before an error
/// stay folded; a trailing partial line is dropped.
async fn fold_reader<R>(
    session: &mut Session,
    report: &mut IngestReport,
    mut reader: R,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut splitter = LineSplitter::default();
    let mut on_line = |line: &str| fold_line(session, report, line);

    loop {
        let buf = reader.fill_buf().await?;
        if buf.is_empty() {
            break;
        }
        let len = buf.len();
        splitter.push(buf, &mut on_line);
        reader.consume(len);
    }
    splitter.finish(&mut on_line);

    Ok(())
}

/// Commits on the blocking pool; the file backend does synchronous disk I/O.
async fn persist(session: Session) -> Result<()> {
    tokio::task::spawn_blocking(move || session.persist())
        .await
        .map_err(|e| WordCounterError::StoreIo(format!("persist task failed: {}", e)))?
}
