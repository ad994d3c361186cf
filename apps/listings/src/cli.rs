//! Command-line presentation layer: builds filter state from flags, runs the
//! filter over a loaded store and prints JSON.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::catalog::{
    rating_label, sample_jobs, sample_recruiters, JOB_LOCATION_OPTIONS, JOB_TYPE_OPTIONS,
    RATING_THRESHOLDS, RECRUITER_LOCATION_OPTIONS, RECRUITER_NICHE_OPTIONS,
};
use crate::config::Config;
use crate::currency::{format_currency, NumberStyle};
use crate::errors::AppError;
use crate::filter::{
    filter_records, Choice, FilterCache, JobFilter, RecordFilter, RecruiterFilter,
};
use crate::models::{Job, Recruiter};
use crate::preview::{tag_preview, Preview, CARD_PREVIEW_LIMIT};
use crate::sources::{load_store, JsonFileSource, RecordSource, StaticSource};
use crate::store::RecordStore;
use crate::validation::{
    validate_contact, validate_login, validate_register, validate_user, ContactRequest,
    LoginRequest, RegisterRequest, User, Validation,
};

#[derive(Parser, Debug)]
#[command(name = "listings", version, about = "Filter job and recruiter listings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter job listings
    Jobs(JobsArgs),
    /// Filter recruiter listings
    Recruiters(RecruitersArgs),
    /// Print selectable filter options for both listings
    Options,
    /// Format an amount the way listing prices are shown
    Currency(CurrencyArgs),
    /// Validate a JSON form body (from a file, or stdin when omitted)
    Check(CheckArgs),
    /// Replay newline-delimited filter states against one loaded store
    Session(SessionArgs),
}

#[derive(Args, Debug)]
pub struct JobsArgs {
    /// Case-insensitive search over title, company and description
    #[arg(long, short, default_value = "")]
    pub query: String,

    /// Employment type, or "All"
    #[arg(long = "type", default_value = "All")]
    pub job_type: Choice,

    /// Exact location, or "All"
    #[arg(long, default_value = "All")]
    pub location: Choice,

    /// Skill tag; repeat to match any of several
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

impl From<JobsArgs> for JobFilter {
    fn from(args: JobsArgs) -> Self {
        let mut filter = JobFilter {
            query: args.query,
            job_type: args.job_type,
            location: args.location,
            tags: Vec::new(),
        };
        for tag in &args.tags {
            if !filter.tags.contains(tag) {
                filter.toggle_tag(tag);
            }
        }
        filter
    }
}

#[derive(Args, Debug)]
pub struct RecruitersArgs {
    /// Case-insensitive search over name, company, bio and specialties
    #[arg(long, short, default_value = "")]
    pub query: String,

    /// Niche the recruiter must cover, or "All"
    #[arg(long, default_value = "All")]
    pub niche: Choice,

    /// Exact location, or "All"
    #[arg(long, default_value = "All")]
    pub location: Choice,

    /// Inclusive minimum rating; 0 disables the filter
    #[arg(long, default_value_t = 0.0)]
    pub min_rating: f64,
}

impl From<RecruitersArgs> for RecruiterFilter {
    fn from(args: RecruitersArgs) -> Self {
        RecruiterFilter {
            query: args.query,
            niche: args.niche,
            location: args.location,
            min_rating: args.min_rating,
        }
    }
}

#[derive(Args, Debug)]
pub struct CurrencyArgs {
    pub amount: f64,

    /// ISO currency code
    #[arg(long)]
    pub currency: Option<String>,

    /// Fixed number of fraction digits
    #[arg(long)]
    pub digits: Option<u8>,

    /// Print the bare number without a currency prefix
    #[arg(long)]
    pub decimal: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormSchema {
    Login,
    Register,
    User,
    Contact,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[arg(value_enum)]
    pub schema: FormSchema,

    pub input: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListingKind {
    Jobs,
    Recruiters,
}

#[derive(Args, Debug)]
pub struct SessionArgs {
    #[arg(value_enum)]
    pub listing: ListingKind,

    /// One JSON filter state per line; stdin when omitted
    pub input: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JobCard<'a> {
    #[serde(flatten)]
    job: &'a Job,
    tag_preview: Preview<'a>,
    tag_overflow: Option<String>,
}

impl<'a> JobCard<'a> {
    fn new(job: &'a Job) -> Self {
        let preview = tag_preview(&job.tags, CARD_PREVIEW_LIMIT);
        Self {
            job,
            tag_overflow: preview.overflow_label(),
            tag_preview: preview,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecruiterCard<'a> {
    #[serde(flatten)]
    recruiter: &'a Recruiter,
    specialty_preview: Preview<'a>,
    specialty_overflow: Option<String>,
}

impl<'a> RecruiterCard<'a> {
    fn new(recruiter: &'a Recruiter) -> Self {
        let preview = tag_preview(&recruiter.specialties, CARD_PREVIEW_LIMIT);
        Self {
            recruiter,
            specialty_overflow: preview.overflow_label(),
            specialty_preview: preview,
        }
    }
}

/// One rendered listing page. An empty `results` is a normal page.
#[derive(Debug, Serialize)]
struct ListingPage<'a, F, C> {
    total: usize,
    filter: &'a F,
    unconstrained: bool,
    results: Vec<C>,
    vocabulary: Vec<String>,
}

fn job_source(config: &Config) -> Box<dyn RecordSource<Job>> {
    match &config.jobs_path {
        Some(path) => Box::new(JsonFileSource::jobs(path.clone())),
        None => Box::new(StaticSource::new(sample_jobs())),
    }
}

fn recruiter_source(config: &Config) -> Box<dyn RecordSource<Recruiter>> {
    match &config.recruiters_path {
        Some(path) => Box::new(JsonFileSource::recruiters(path.clone())),
        None => Box::new(StaticSource::new(sample_recruiters())),
    }
}

fn render_job_page(
    store: &RecordStore<Job>,
    filter: &JobFilter,
    matched: Vec<&Job>,
) -> Result<Value, AppError> {
    let results: Vec<JobCard> = matched.into_iter().map(JobCard::new).collect();
    let page = ListingPage {
        total: results.len(),
        filter,
        unconstrained: filter.is_unconstrained(),
        results,
        vocabulary: store.tag_vocabulary(),
    };
    Ok(serde_json::to_value(page)?)
}

fn render_recruiter_page(
    store: &RecordStore<Recruiter>,
    filter: &RecruiterFilter,
    matched: Vec<&Recruiter>,
) -> Result<Value, AppError> {
    let results: Vec<RecruiterCard> = matched.into_iter().map(RecruiterCard::new).collect();
    let page = ListingPage {
        total: results.len(),
        filter,
        unconstrained: filter.is_unconstrained(),
        results,
        vocabulary: store.niche_vocabulary(),
    };
    Ok(serde_json::to_value(page)?)
}

pub fn job_page(store: &RecordStore<Job>, filter: &JobFilter) -> Result<Value, AppError> {
    render_job_page(store, filter, filter_records(store.all_records(), filter))
}

pub fn recruiter_page(
    store: &RecordStore<Recruiter>,
    filter: &RecruiterFilter,
) -> Result<Value, AppError> {
    render_recruiter_page(store, filter, filter_records(store.all_records(), filter))
}

type RenderPage<R, F> = fn(&RecordStore<R>, &F, Vec<&R>) -> Result<Value, AppError>;

/// Renders one page per non-blank line of `raw`, reusing the previous result
/// whenever a state repeats against the same store.
fn replay_session<R, F>(
    store: &RecordStore<R>,
    raw: &str,
    render: RenderPage<R, F>,
) -> Result<Value, AppError>
where
    F: RecordFilter<R> + PartialEq + Clone + DeserializeOwned,
{
    let mut cache = FilterCache::new();
    let mut pages = Vec::new();

    for line in raw.lines().filter(|line| !line.trim().is_empty()) {
        let filter: F = serde_json::from_str(line)?;
        let matched = cache.get(store, &filter);
        pages.push(render(store, &filter, matched)?);
    }

    info!(
        pages = pages.len(),
        hits = cache.hits(),
        misses = cache.misses(),
        "session replayed"
    );
    Ok(json!({
        "pages": pages,
        "cache": { "hits": cache.hits(), "misses": cache.misses() }
    }))
}

fn form_outcome<T: Serialize>(
    schema: FormSchema,
    outcome: Validation<T>,
) -> Result<Value, AppError> {
    if !outcome.is_valid() {
        info!(?schema, errors = outcome.errors().len(), "form rejected");
    }
    Ok(serde_json::to_value(outcome)?)
}

fn check_form(schema: FormSchema, raw: &str) -> Result<Value, AppError> {
    match schema {
        FormSchema::Login => {
            let request: LoginRequest = serde_json::from_str(raw)?;
            form_outcome(schema, validate_login(request))
        }
        FormSchema::Register => {
            let request: RegisterRequest = serde_json::from_str(raw)?;
            form_outcome(schema, validate_register(request))
        }
        FormSchema::User => {
            let user: User = serde_json::from_str(raw)?;
            form_outcome(schema, validate_user(user))
        }
        FormSchema::Contact => {
            let request: ContactRequest = serde_json::from_str(raw)?;
            form_outcome(schema, validate_contact(request))
        }
    }
}

async fn read_input(path: Option<&PathBuf>) -> Result<String, AppError> {
    let raw = match path {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => tokio::task::spawn_blocking(|| std::io::read_to_string(std::io::stdin()))
            .await
            .map_err(anyhow::Error::from)??,
    };
    Ok(raw)
}

/// Executes one command and returns the JSON document to print.
pub async fn run(command: Commands, config: &Config) -> Result<Value, AppError> {
    match command {
        Commands::Jobs(args) => {
            let store = load_store(job_source(config).as_ref()).await?;
            job_page(&store, &JobFilter::from(args))
        }
        Commands::Recruiters(args) => {
            let store = load_store(recruiter_source(config).as_ref()).await?;
            recruiter_page(&store, &RecruiterFilter::from(args))
        }
        Commands::Options => {
            let jobs = load_store(job_source(config).as_ref()).await?;
            let recruiters = load_store(recruiter_source(config).as_ref()).await?;
            let ratings: Vec<Value> = RATING_THRESHOLDS
                .iter()
                .map(|t| json!({ "value": t, "label": rating_label(*t) }))
                .collect();
            Ok(json!({
                "jobs": {
                    "types": JOB_TYPE_OPTIONS,
                    "locations": JOB_LOCATION_OPTIONS,
                    "tags": jobs.tag_vocabulary(),
                },
                "recruiters": {
                    "niches": RECRUITER_NICHE_OPTIONS,
                    "locations": RECRUITER_LOCATION_OPTIONS,
                    "ratings": ratings,
                    "observedNiches": recruiters.niche_vocabulary(),
                }
            }))
        }
        Commands::Currency(args) => {
            let style = args.decimal.then_some(NumberStyle::Decimal);
            Ok(json!({
                "formatted": format_currency(args.amount, args.currency.as_deref(), args.digits, style)
            }))
        }
        Commands::Check(args) => {
            let raw = read_input(args.input.as_ref()).await?;
            check_form(args.schema, &raw)
        }
        Commands::Session(args) => {
            let raw = read_input(args.input.as_ref()).await?;
            match args.listing {
                ListingKind::Jobs => {
                    let store = load_store(job_source(config).as_ref()).await?;
                    replay_session(&store, &raw, render_job_page)
                }
                ListingKind::Recruiters => {
                    let store = load_store(recruiter_source(config).as_ref()).await?;
                    replay_session(&store, &raw, render_recruiter_page)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Commands {
        Cli::try_parse_from(std::iter::once("listings").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    #[test]
    fn test_jobs_flags_build_filter() {
        let Commands::Jobs(args) = parse(&[
            "jobs", "--query", "frontend", "--type", "Full-time", "--location",
            "San Francisco, CA", "--tag", "React", "--tag", "React",
        ]) else {
            panic!("expected jobs command");
        };
        let filter = JobFilter::from(args);
        assert_eq!(filter.query, "frontend");
        assert_eq!(filter.job_type, Choice::only("Full-time"));
        assert_eq!(filter.tags, vec!["React"]);
    }

    #[test]
    fn test_recruiter_flags_default_to_unconstrained() {
        let Commands::Recruiters(args) = parse(&["recruiters"]) else {
            panic!("expected recruiters command");
        };
        assert!(RecruiterFilter::from(args).is_unconstrained());
    }

    #[test]
    fn test_job_page_shape() {
        let store = RecordStore::new(sample_jobs()).unwrap();
        let filter = JobFilter {
            query: "frontend".to_string(),
            ..Default::default()
        };
        let page = job_page(&store, &filter).unwrap();
        assert_eq!(page["total"], 1);
        assert_eq!(page["results"][0]["id"], "1");
        assert_eq!(page["results"][0]["type"], "Full-time");
        assert_eq!(page["results"][0]["tagOverflow"], "+1");
        assert_eq!(page["filter"]["type"], "All");
        assert_eq!(page["unconstrained"], false);
        assert_eq!(page["vocabulary"][0], "React");
    }

    #[test]
    fn test_default_page_reports_unconstrained() {
        let store = RecordStore::new(sample_jobs()).unwrap();
        let page = job_page(&store, &JobFilter::default()).unwrap();
        assert_eq!(page["unconstrained"], true);
        assert_eq!(page["total"], 10);
    }

    #[test]
    fn test_session_reuses_repeated_states() {
        let store = RecordStore::new(sample_jobs()).unwrap();
        let raw = r#"{"query": "developer"}
{"query": "developer"}

{"location": "Remote"}
{"location": "Remote"}
{"query": "developer"}
"#;
        let out = replay_session(&store, raw, render_job_page).unwrap();
        let pages = out["pages"].as_array().unwrap();
        assert_eq!(pages.len(), 5);
        assert_eq!(pages[0], pages[1]);
        assert_eq!(pages[2]["total"], 2);
        let developer = JobFilter {
            query: "developer".to_string(),
            ..Default::default()
        };
        assert_eq!(pages[0], job_page(&store, &developer).unwrap());
        assert_eq!(out["cache"]["hits"], 2);
        assert_eq!(out["cache"]["misses"], 3);
    }

    #[test]
    fn test_session_recruiter_states_use_camel_case() {
        let store = RecordStore::new(sample_recruiters()).unwrap();
        let raw = r#"{"niche": "Leadership", "minRating": 4.8}"#;
        let out = replay_session(&store, raw, render_recruiter_page).unwrap();
        assert_eq!(out["pages"][0]["total"], 1);
        assert_eq!(out["pages"][0]["results"][0]["name"], "Olivia Brown");
        assert_eq!(out["cache"]["misses"], 1);
    }

    #[test]
    fn test_session_rejects_malformed_state() {
        let store = RecordStore::new(sample_jobs()).unwrap();
        let err = replay_session(&store, "{\"tags\": 3}", render_job_page).unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[tokio::test]
    async fn test_run_session_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("states.jsonl");
        std::fs::write(&path, "{}\n{}\n").unwrap();
        let command = parse(&["session", "jobs", path.to_str().unwrap()]);
        let out = run(command, &Config::default()).await.unwrap();
        assert_eq!(out["pages"][1]["total"], 10);
        assert_eq!(out["cache"]["hits"], 1);
    }

    #[test]
    fn test_empty_page_is_not_an_error() {
        let store = RecordStore::new(sample_recruiters()).unwrap();
        let filter = RecruiterFilter {
            min_rating: 5.0,
            ..Default::default()
        };
        let page = recruiter_page(&store, &filter).unwrap();
        assert_eq!(page["total"], 0);
        assert_eq!(page["results"], json!([]));
    }

    #[tokio::test]
    async fn test_run_recruiters_on_sample_data() {
        let command = parse(&["recruiters", "--niche", "Leadership", "--min-rating", "4.8"]);
        let page = run(command, &Config::default()).await.unwrap();
        assert_eq!(page["total"], 1);
        assert_eq!(page["results"][0]["name"], "Olivia Brown");
    }

    #[tokio::test]
    async fn test_run_options_lists_vocabularies() {
        let options = run(Commands::Options, &Config::default()).await.unwrap();
        assert_eq!(options["jobs"]["types"][0], "All");
        assert_eq!(options["recruiters"]["ratings"][3]["label"], "4.8+");
        assert_eq!(options["jobs"]["tags"][0], "React");
    }

    #[tokio::test]
    async fn test_run_currency() {
        let out = run(parse(&["currency", "2500000"]), &Config::default())
            .await
            .unwrap();
        assert_eq!(out["formatted"], "Rp\u{a0}2.500.000");
    }

    #[test]
    fn test_check_form_reports_field_errors() {
        let out = check_form(
            FormSchema::Login,
            r#"{"email": "nope", "password": "12345678", "purpose": "landing"}"#,
        )
        .unwrap();
        assert_eq!(out["status"], "invalid");
        assert_eq!(out["data"][0]["path"], "email");
    }

    #[test]
    fn test_check_form_rejects_wrong_shape() {
        let err = check_form(FormSchema::Contact, r#"{"name": 3}"#).unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }
}
