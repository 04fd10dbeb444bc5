use std::{
    cell::RefCell,
    time::{Duration, Instant},
};

use log::{debug, info};
use rand::{RngCore, SeedableRng, rngs::StdRng};
use uuid::Uuid;

use super::{
    build_name,
    config::{ColumnRequest, GenerationConfig, ValidatedConfig},
    family::StrategyRegistry,
    gender::GenerationContext,
    item::ItemWriter,
    specifier::Specifier,
    value::{Column, Row, Table, assemble, inject_blanks},
};
use crate::{DbGenError, provider::Provider};

/// Type alias for job execution results.
type JobResult<T> = Result<T, DbGenError>;

pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Represents a job that can be executed.
pub trait Job {
    /// Runs the job and returns the result of the job execution.
    ///
    /// # Returns
    /// - `Ok(JobExecution)` when every column was generated and written
    /// - `Err(DbGenError)` on the first failure; no row is written then
    fn run(&self) -> JobResult<JobExecution>;
}

/// Represents the execution of a job: timing and the generated table.
#[derive(Debug)]
pub struct JobExecution {
    /// The time when the job started executing
    pub start: Instant,
    /// The time when the job finished executing
    pub end: Instant,
    /// The total duration of the job execution
    pub duration: Duration,
    pub table: Table,
}

/// A configured generation run.
///
/// Gender assignment happens once per run, before any column; columns are
/// then generated in the requested order, blanked, transposed into rows and
/// finally handed to the writer, if any, in chunks.
pub struct GenerationJob<'a> {
    /// Unique identifier for this job instance
    id: Uuid,
    name: String,
    config: ValidatedConfig,
    provider: &'a dyn Provider,
    registry: StrategyRegistry,
    rng: RefCell<StdRng>,
    writer: Option<&'a dyn ItemWriter<Row>>,
    chunk_size: usize,
}

impl GenerationJob<'_> {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    fn generate(&self) -> JobResult<Table> {
        let mut rng = self.rng.borrow_mut();
        let rng: &mut dyn RngCore = &mut *rng;

        let context = GenerationContext::new(self.config.row_count, self.config.locale, rng);

        let mut columns = Vec::with_capacity(self.config.columns.len());
        for request in &self.config.columns {
            let column = self
                .generate_column(request, &context, rng)
                .map_err(|error| error.in_column(&request.name, &request.specifier))?;
            columns.push(inject_blanks(column, request.blank_percent, rng));
        }

        Ok(Table {
            column_names: self
                .config
                .columns
                .iter()
                .map(|request| request.name.clone())
                .collect(),
            rows: assemble(columns),
        })
    }

    fn generate_column(
        &self,
        request: &ColumnRequest,
        context: &GenerationContext,
        rng: &mut dyn RngCore,
    ) -> JobResult<Column> {
        let specifier = Specifier::parse(&request.specifier)?;
        let strategy = self.registry.dispatch(specifier.family())?;
        let column = strategy.generate(specifier.params(), context, self.provider, rng)?;
        debug!(
            "Generated column {} with {}: {} values",
            request.name,
            specifier.raw(),
            column.len()
        );
        Ok(column)
    }

    fn write(&self, writer: &dyn ItemWriter<Row>, rows: &[Row]) -> JobResult<()> {
        writer.open()?;
        for chunk in rows.chunks(self.chunk_size) {
            debug!("Start writing chunk of {} rows", chunk.len());
            writer.write(chunk)?;
            writer.flush()?;
        }
        writer.close()
    }
}

impl Job for GenerationJob<'_> {
    fn run(&self) -> JobResult<JobExecution> {
        let start = Instant::now();

        info!("Start of job: {}, id: {}", self.name, self.id);

        let table = self.generate()?;

        if let Some(writer) = self.writer {
            self.write(writer, &table.rows)?;
        }

        info!(
            "End of job: {}, id: {}, {} rows of {} columns",
            self.name,
            self.id,
            table.row_count(),
            table.column_count()
        );

        Ok(JobExecution {
            start,
            end: Instant::now(),
            duration: start.elapsed(),
            table,
        })
    }
}

/// Builder for a [`GenerationJob`].
///
/// # Example
///
/// ```
/// # #[cfg(feature = "fake")]
/// # {
/// use dbgen::core::{
///     config::GenerationConfigBuilder,
///     job::{GenerationJobBuilder, Job},
/// };
/// use dbgen::provider::fake::FakeProvider;
///
/// let config = GenerationConfigBuilder::new()
///     .column("id", "int_1_100")
///     .column("name", "name_full")
///     .row_count(5)
///     .build();
/// let provider = FakeProvider::new();
///
/// let job = GenerationJobBuilder::new()
///     .name("people".to_string())
///     .config(config)
///     .provider(&provider)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let execution = job.run().unwrap();
/// assert_eq!(execution.table.row_count(), 5);
/// # }
/// ```
#[derive(Default)]
pub struct GenerationJobBuilder<'a> {
    name: Option<String>,
    config: Option<GenerationConfig>,
    provider: Option<&'a dyn Provider>,
    registry: Option<StrategyRegistry>,
    seed: Option<u64>,
    writer: Option<&'a dyn ItemWriter<Row>>,
    chunk_size: Option<usize>,
}

impl<'a> GenerationJobBuilder<'a> {
    pub fn new() -> GenerationJobBuilder<'a> {
        Self::default()
    }

    /// Sets the name of the job; a random one is generated otherwise.
    pub fn name(mut self, name: String) -> GenerationJobBuilder<'a> {
        self.name = Some(name);
        self
    }

    pub fn config(mut self, config: GenerationConfig) -> GenerationJobBuilder<'a> {
        self.config = Some(config);
        self
    }

    pub fn provider(mut self, provider: &'a dyn Provider) -> GenerationJobBuilder<'a> {
        self.provider = Some(provider);
        self
    }

    /// Replaces the built-in strategies.
    pub fn registry(mut self, registry: StrategyRegistry) -> GenerationJobBuilder<'a> {
        self.registry = Some(registry);
        self
    }

    /// Makes the run reproducible; the generator is seeded from the OS
    /// otherwise.
    pub fn seed(mut self, seed: u64) -> GenerationJobBuilder<'a> {
        self.seed = Some(seed);
        self
    }

    pub fn writer(mut self, writer: &'a dyn ItemWriter<Row>) -> GenerationJobBuilder<'a> {
        self.writer = Some(writer);
        self
    }

    /// Number of rows handed to the writer at once.
    pub fn chunk(mut self, chunk_size: usize) -> GenerationJobBuilder<'a> {
        self.chunk_size = Some(chunk_size);
        self
    }

    /// Validates the configuration and builds the job.
    ///
    /// # Errors
    /// [`DbGenError::Configuration`] when the configuration is invalid, no
    /// provider was given or the chunk size is zero.
    pub fn build(self) -> JobResult<GenerationJob<'a>> {
        let config = self.config.unwrap_or_default().validate()?;

        let provider = self
            .provider
            .ok_or_else(|| DbGenError::Configuration("a provider is required".to_owned()))?;

        let chunk_size = self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE);
        if chunk_size == 0 {
            return Err(DbGenError::Configuration(
                "chunk size must be positive".to_owned(),
            ));
        }

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(GenerationJob {
            id: Uuid::new_v4(),
            name: self.name.unwrap_or_else(build_name),
            config,
            provider,
            registry: self.registry.unwrap_or_default(),
            rng: RefCell::new(rng),
            writer: self.writer,
            chunk_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::{GenerationJobBuilder, Job};
    use crate::{
        DbGenError,
        core::{
            config::GenerationConfigBuilder,
            item::{ItemWriter, ItemWriterResult},
            specifier::SpecifierError,
            value::{Row, Value},
        },
        provider::stub::StubProvider,
    };

    #[derive(Default)]
    struct RecordingWriter {
        events: RefCell<Vec<String>>,
        rows: RefCell<Vec<Row>>,
    }

    impl ItemWriter<Row> for RecordingWriter {
        fn write(&self, items: &[Row]) -> ItemWriterResult {
            self.events.borrow_mut().push(format!("write {}", items.len()));
            self.rows.borrow_mut().extend_from_slice(items);
            Ok(())
        }

        fn flush(&self) -> ItemWriterResult {
            self.events.borrow_mut().push("flush".to_owned());
            Ok(())
        }

        fn open(&self) -> ItemWriterResult {
            self.events.borrow_mut().push("open".to_owned());
            Ok(())
        }

        fn close(&self) -> ItemWriterResult {
            self.events.borrow_mut().push("close".to_owned());
            Ok(())
        }
    }

    #[test]
    fn rows_are_written_in_chunks() {
        let provider = StubProvider::default();
        let writer = RecordingWriter::default();
        let job = GenerationJobBuilder::new()
            .config(
                GenerationConfigBuilder::new()
                    .column("n", "int_1_1")
                    .row_count(5)
                    .build(),
            )
            .provider(&provider)
            .writer(&writer)
            .chunk(2)
            .seed(1)
            .build()
            .unwrap();

        let execution = job.run().unwrap();

        assert_eq!(
            *writer.events.borrow(),
            ["open", "write 2", "flush", "write 2", "flush", "write 1", "flush", "close"]
        );
        assert_eq!(*writer.rows.borrow(), execution.table.rows);
        assert!(execution.end >= execution.start);
    }

    #[test]
    fn failing_column_writes_nothing() {
        let provider = StubProvider::default();
        let writer = RecordingWriter::default();
        let job = GenerationJobBuilder::new()
            .config(
                GenerationConfigBuilder::new()
                    .column("ok", "int")
                    .column("bad", "int_9_1")
                    .build(),
            )
            .provider(&provider)
            .writer(&writer)
            .build()
            .unwrap();

        match job.run() {
            Err(DbGenError::Column {
                column,
                specifier,
                source: SpecifierError::InvertedRange { .. },
            }) => {
                assert_eq!(column, "bad");
                assert_eq!(specifier, "int_9_1");
            }
            other => panic!("unexpected result {other:?}"),
        }
        assert!(writer.events.borrow().is_empty());
    }

    #[test]
    fn same_seed_gives_same_table() {
        let provider = StubProvider::default();
        let config = GenerationConfigBuilder::new()
            .column("a", "int")
            .column("b", "string")
            .column("c", "gender")
            .blank_percentages(vec![30])
            .row_count(20)
            .build();
        let run = |seed| {
            GenerationJobBuilder::new()
                .config(config.clone())
                .provider(&provider)
                .seed(seed)
                .build()
                .unwrap()
                .run()
                .unwrap()
                .table
        };
        assert_eq!(run(7), run(7));
    }

    #[test]
    fn build_requires_a_provider_and_a_chunk() {
        assert!(matches!(
            GenerationJobBuilder::new().build(),
            Err(DbGenError::Configuration(_))
        ));
        let provider = StubProvider::default();
        assert!(matches!(
            GenerationJobBuilder::new().provider(&provider).chunk(0).build(),
            Err(DbGenError::Configuration(_))
        ));
    }

    #[test]
    fn default_configuration_generates_ten_rows() {
        let provider = StubProvider::default();
        let job = GenerationJobBuilder::new()
            .provider(&provider)
            .build()
            .unwrap();
        let table = job.run().unwrap().table;
        assert_eq!(table.column_names, ["name", "phone", "email"]);
        assert_eq!(table.row_count(), 10);
        assert_eq!(
            table.rows[0][2],
            Some(Value::Text("user@example.com".to_owned()))
        );
    }
}
