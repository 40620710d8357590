//! Prometheus metrics for the hot-search analyzer CLI.
//!
//! Exposes:
//! - `hotsearch_analyzer_command_duration_seconds` (histogram)
//! - `hotsearch_analyzer_command_total` (counter with status)
//! - `hotsearch_analyzer_command_inflight` (gauge)
//! - `hotsearch_analyzer_feed_fetch_total` (counter by outcome)
//! - `hotsearch_analyzer_feed_topics_total` (counter)
//! - `hotsearch_analyzer_topics_analyzed_total` (counter by category and tier)
//! - `hotsearch_analyzer_last_avg_score` (gauge)
//! - process metrics via `process` collector

use std::convert::Infallible;
use std::net::SocketAddr;
use std::time::Instant;

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use once_cell::sync::Lazy;
use prometheus::process_collector::ProcessCollector;
use prometheus::{
    default_registry, register_gauge, register_histogram_vec, register_int_counter,
    register_int_counter_vec, register_int_gauge_vec, Encoder, Gauge, HistogramVec, IntCounter,
    IntCounterVec, IntGaugeVec, TextEncoder,
};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::analysis::models::{AnalysisReport, Topic};

static PROCESS_COLLECTOR: Lazy<()> = Lazy::new(|| {
    if let Err(err) = default_registry().register(Box::new(ProcessCollector::for_self())) {
        warn!("Failed to register process collector: {}", err);
    }
});

static COMMAND_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    // 10ms .. ~80s
    let buckets =
        prometheus::exponential_buckets(0.01, 2.0, 14).expect("failed to create histogram buckets");
    register_histogram_vec!(
        "hotsearch_analyzer_command_duration_seconds",
        "CLI command duration in seconds",
        &["command"],
        buckets
    )
    .expect("failed to register command duration histogram")
});

static COMMAND_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "hotsearch_analyzer_command_total",
        "Total command executions by status",
        &["command", "status"]
    )
    .expect("failed to register command counter")
});

static COMMAND_INFLIGHT: Lazy<IntGaugeVec> = Lazy::new(|| {
    register_int_gauge_vec!(
        "hotsearch_analyzer_command_inflight",
        "Number of in-flight commands",
        &["command"]
    )
    .expect("failed to register inflight gauge")
});

static FEED_FETCHES: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "hotsearch_analyzer_feed_fetch_total",
        "Hot-search feed requests by outcome",
        &["outcome"]
    )
    .expect("failed to register feed fetch counter")
});

static FEED_TOPICS: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "hotsearch_analyzer_feed_topics_total",
        "Topics received from the hot-search feed"
    )
    .expect("failed to register feed topics counter")
});

static TOPICS_ANALYZED: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "hotsearch_analyzer_topics_analyzed_total",
        "Analyzed topics by category and score tier",
        &["category", "tier"]
    )
    .expect("failed to register topics counter")
});

static LAST_AVG_SCORE: Lazy<Gauge> = Lazy::new(|| {
    register_gauge!(
        "hotsearch_analyzer_last_avg_score",
        "Average idea score of the most recent analysis"
    )
    .expect("failed to register average score gauge")
});

fn init_collectors() {
    Lazy::force(&PROCESS_COLLECTOR);
    Lazy::force(&COMMAND_DURATION);
    Lazy::force(&COMMAND_TOTAL);
    Lazy::force(&COMMAND_INFLIGHT);
    Lazy::force(&FEED_FETCHES);
    Lazy::force(&FEED_TOPICS);
    Lazy::force(&TOPICS_ANALYZED);
    Lazy::force(&LAST_AVG_SCORE);
}

/// Tracks one CLI command from start to finish.
///
/// Dropping the timer without calling [`CommandTimer::finish`] records the
/// command as failed.
#[derive(Debug)]
pub struct CommandTimer {
    command: &'static str,
    started: Instant,
    finished: bool,
}

impl CommandTimer {
    pub fn start(command: &'static str) -> Self {
        init_collectors();
        COMMAND_INFLIGHT.with_label_values(&[command]).inc();
        Self {
            command,
            started: Instant::now(),
            finished: false,
        }
    }

    pub fn finish(mut self, success: bool) {
        self.record(success);
    }

    fn record(&mut self, success: bool) {
        if self.finished {
            return;
        }
        self.finished = true;
        COMMAND_INFLIGHT.with_label_values(&[self.command]).dec();
        COMMAND_DURATION
            .with_label_values(&[self.command])
            .observe(self.started.elapsed().as_secs_f64());
        COMMAND_TOTAL
            .with_label_values(&[self.command, if success { "ok" } else { "error" }])
            .inc();
    }
}

impl Drop for CommandTimer {
    fn drop(&mut self) {
        self.record(false);
    }
}

/// Record the outcome of one feed request: `ok`, `empty` or `error`.
pub fn record_fetch(result: &crate::Result<Vec<Topic>>) {
    init_collectors();
    let outcome = match result {
        Ok(topics) if topics.is_empty() => "empty",
        Ok(topics) => {
            FEED_TOPICS.inc_by(topics.len() as u64);
            "ok"
        }
        Err(_) => "error",
    };
    FEED_FETCHES.with_label_values(&[outcome]).inc();
}

/// Count every analyzed topic of a report by category and tier.
pub fn record_report(report: &AnalysisReport) {
    init_collectors();
    for result in &report.topics {
        TOPICS_ANALYZED
            .with_label_values(&[result.category.as_str(), result.idea.score_tier().as_str()])
            .inc();
    }
    LAST_AVG_SCORE.set(report.avg_score);
}

fn plain_response(status: StatusCode, body: Full<Bytes>) -> Response<Full<Bytes>> {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    response
}

async fn metrics_response() -> Result<Response<Full<Bytes>>, Infallible> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        error!("Failed to encode metrics: {}", err);
        return Ok(plain_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            Full::from("encode error"),
        ));
    }

    let mut response = plain_response(StatusCode::OK, Full::from(buffer));
    if let Ok(value) = encoder.format_type().parse::<hyper::header::HeaderValue>() {
        response
            .headers_mut()
            .insert(hyper::header::CONTENT_TYPE, value);
    }
    Ok(response)
}

async fn handle_request(req: Request<Incoming>) -> Result<Response<Full<Bytes>>, Infallible> {
    match req.uri().path() {
        "/metrics" => metrics_response().await,
        _ => Ok(plain_response(StatusCode::NOT_FOUND, Full::new(Bytes::new()))),
    }
}

async fn serve(addr: SocketAddr) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Prometheus metrics endpoint started");

    loop {
        let (stream, peer) = listener.accept().await?;
        let service = service_fn(handle_request);
        let io = TokioIo::new(stream);

        tokio::spawn(async move {
            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                warn!(?peer, "Metrics connection error: {}", err);
            }
        });
    }
}

/// Spawn the metrics HTTP endpoint on the given address.
pub fn spawn_metrics_server(addr: SocketAddr) {
    init_collectors();
    tokio::spawn(async move {
        if let Err(err) = serve(addr).await {
            error!(%addr, "Metrics server failed: {}", err);
        }
    });
}
