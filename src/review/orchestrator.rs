//! Assessment Orchestrator
//!
//! Owns the run registry and drives each assessment through
//! Pending -> Analyzing -> {Completed, Failed}.
//!
//! ## Concurrency
//! - Runs are spawned on the caller's Tokio runtime; `start` returns
//!   immediately and fails without one
//! - The five agents of a run execute concurrently, polled through
//!   `FuturesOrdered` so progress bands land in pillar order
//! - Only the run task writes a run's state; readers get snapshots
//! - A supervisor task marks the run Failed if the run task panics

use std::sync::{Arc, Mutex, OnceLock, RwLock};
use std::time::Duration;

use chrono::Utc;
use dashmap::DashMap;
use futures::StreamExt;
use futures::stream::FuturesOrdered;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tracing::{debug, error, info, warn};

use crate::constants::orchestrator::{POLL_INTERVAL_MS, PROGRESS_BAND};
use crate::review::agents::{AgentConfig, PillarAgent};
use crate::review::reactive::ReactiveAnalyzer;
use crate::review::synthesis::Synthesizer;
use crate::types::{
    AnalysisRequest, AssessmentBundle, Result, RunState, RunStatus, Scorecard, ScopeError,
};

// =============================================================================
// Run Slot
// =============================================================================

/// Per-assessment state shared between the registry and the run task
#[derive(Debug)]
struct RunSlot {
    state: RwLock<RunState>,
    scorecard: OnceLock<Scorecard>,
    task: Mutex<Option<AbortHandle>>,
}

impl RunSlot {
    fn new(id: &str) -> Self {
        Self {
            state: RwLock::new(RunState::pending(id)),
            scorecard: OnceLock::new(),
            task: Mutex::new(None),
        }
    }

    fn snapshot(&self) -> RunState {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Apply a state change. Terminal states never change again and progress
    /// never goes backwards.
    fn transition(&self, to: RunStatus, progress: u8, message: Option<String>) -> Result<()> {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let allowed = match (state.status, to) {
            (from, _) if from.is_terminal() => false,
            (RunStatus::Pending, RunStatus::Analyzing | RunStatus::Failed) => true,
            (RunStatus::Analyzing, RunStatus::Completed | RunStatus::Failed) => true,
            _ => false,
        };
        if !allowed {
            return Err(ScopeError::InvalidTransition {
                id: state.assessment_id.clone(),
                from: state.status,
                to,
            });
        }

        state.status = to;
        state.progress = state.progress.max(progress.min(100));
        if message.is_some() {
            state.message = message;
        }
        state.updated_at = Utc::now();
        Ok(())
    }

    fn advance(&self, band: u8) {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if state.status == RunStatus::Analyzing {
            state.progress = state.progress.saturating_add(band).min(100);
            state.updated_at = Utc::now();
        }
    }

    fn fail(&self, message: impl Into<String>) {
        let message = message.into();
        let id = self.snapshot().assessment_id;
        if let Err(e) = self.transition(RunStatus::Failed, 0, Some(message.clone())) {
            debug!("{}: not marking failed ({}): {}", id, e, message);
        } else {
            warn!("{}: assessment failed: {}", id, message);
        }
    }

    fn set_task(&self, handle: AbortHandle) {
        *self
            .task
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(handle);
    }

    fn abort(&self) {
        if let Some(handle) = self
            .task
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
        {
            handle.abort();
        }
    }
}

/// What a run starts from
enum RunInput {
    Request(AnalysisRequest),
    Bundle(AssessmentBundle),
}

// =============================================================================
// Orchestrator
// =============================================================================

/// Registry of assessment runs sharing one [`AgentConfig`]
#[derive(Debug)]
pub struct Orchestrator {
    config: Arc<AgentConfig>,
    runs: DashMap<String, Arc<RunSlot>>,
}

impl Orchestrator {
    pub fn new(config: AgentConfig) -> Self {
        Self {
            config: Arc::new(config),
            runs: DashMap::new(),
        }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Register an assessment in Pending
    pub fn create(&self, assessment_id: &str) -> Result<RunState> {
        use dashmap::mapref::entry::Entry;

        match self.runs.entry(assessment_id.to_string()) {
            Entry::Occupied(_) => Err(ScopeError::AssessmentExists(assessment_id.to_string())),
            Entry::Vacant(vacant) => {
                let slot = Arc::new(RunSlot::new(assessment_id));
                let state = slot.snapshot();
                vacant.insert(slot);
                Ok(state)
            }
        }
    }

    /// Begin analysis of a prepared request. Registers the assessment if
    /// needed; fails if it has already been started.
    pub fn start(&self, assessment_id: &str, request: AnalysisRequest) -> Result<()> {
        self.launch(assessment_id, RunInput::Request(request))
    }

    /// Begin analysis from raw material; incident CSV is analyzed inside the
    /// run before the agents start
    pub fn start_bundle(&self, assessment_id: &str, bundle: AssessmentBundle) -> Result<()> {
        self.launch(assessment_id, RunInput::Bundle(bundle))
    }

    pub fn get_state(&self, assessment_id: &str) -> Result<RunState> {
        Ok(self.slot(assessment_id)?.snapshot())
    }

    /// The scorecard of a Completed run
    pub fn get_scorecard(&self, assessment_id: &str) -> Result<Scorecard> {
        let slot = self.slot(assessment_id)?;
        let state = slot.snapshot();
        match (state.status, slot.scorecard.get()) {
            (RunStatus::Completed, Some(card)) => Ok(card.clone()),
            (status, _) => Err(ScopeError::NotCompleted {
                id: assessment_id.to_string(),
                status,
            }),
        }
    }

    /// Stop a run that has not finished; the run ends Failed
    pub fn cancel(&self, assessment_id: &str) -> Result<RunState> {
        let slot = self.slot(assessment_id)?;
        slot.abort();
        if !slot.snapshot().status.is_terminal() {
            slot.fail("cancelled");
        }
        Ok(slot.snapshot())
    }

    /// Drop an assessment, aborting its run if still active
    pub fn remove(&self, assessment_id: &str) -> Result<RunState> {
        let (_, slot) = self
            .runs
            .remove(assessment_id)
            .ok_or_else(|| ScopeError::AssessmentNotFound(assessment_id.to_string()))?;
        slot.abort();
        Ok(slot.snapshot())
    }

    /// Poll until the run reaches a terminal state
    pub async fn wait(&self, assessment_id: &str, timeout: Duration) -> Result<RunState> {
        let slot = self.slot(assessment_id)?;
        let poll = async {
            loop {
                let state = slot.snapshot();
                if state.status.is_terminal() {
                    return Ok::<_, ScopeError>(state);
                }
                tokio::time::sleep(Duration::from_millis(POLL_INTERVAL_MS)).await;
            }
        };
        crate::ai::with_timeout(timeout, poll, &format!("waiting for {}", assessment_id)).await
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    fn slot(&self, assessment_id: &str) -> Result<Arc<RunSlot>> {
        self.runs
            .get(assessment_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| ScopeError::AssessmentNotFound(assessment_id.to_string()))
    }

    fn launch(&self, assessment_id: &str, input: RunInput) -> Result<()> {
        // resolve the runtime before touching state so a failed start leaves
        // the assessment startable
        let runtime = Handle::try_current().map_err(|e| ScopeError::Runtime(e.to_string()))?;

        let slot = Arc::clone(
            self.runs
                .entry(assessment_id.to_string())
                .or_insert_with(|| Arc::new(RunSlot::new(assessment_id)))
                .value(),
        );

        slot.transition(RunStatus::Analyzing, 0, None)?;
        debug!("{}: analyzing", assessment_id);

        let config = Arc::clone(&self.config);
        let run = runtime.spawn(run(Arc::clone(&config), Arc::clone(&slot), input));
        slot.set_task(run.abort_handle());

        let supervised = Arc::clone(&slot);
        runtime.spawn(async move {
            if let Err(e) = run.await
                && e.is_panic()
            {
                error!("assessment task panicked: {}", e);
                supervised.fail("analysis task panicked");
            }
        });

        Ok(())
    }
}

// =============================================================================
// Run Task
// =============================================================================

async fn run(config: Arc<AgentConfig>, slot: Arc<RunSlot>, input: RunInput) {
    let id = slot.snapshot().assessment_id;

    let request = match prepare(&config, input) {
        Ok(request) => Arc::new(request),
        Err(e) => {
            slot.fail(e.to_string());
            return;
        }
    };

    let mut agents: FuturesOrdered<_> = PillarAgent::all()
        .into_iter()
        .map(|agent| {
            let request = Arc::clone(&request);
            let config = Arc::clone(&config);
            async move { agent.analyze(&request, &config).await }
        })
        .collect();

    let mut results = Vec::with_capacity(5);
    while let Some(result) = agents.next().await {
        debug!(
            "{}: {} done via {} ({:.1})",
            id, result.pillar, result.source, result.overall_score
        );
        results.push(result);
        slot.advance(PROGRESS_BAND);
        // let pollers observe each band
        tokio::task::yield_now().await;
    }

    let scorecard = Synthesizer::new(&config.weights, config.max_recommendations)
        .synthesize(results, request.reactive_summary.clone());
    info!(
        "{}: completed at {:.1}% ({} of {} agents on LLM path)",
        id,
        scorecard.overall_percentage,
        scorecard.collaboration_metrics.agents_on_llm_path,
        scorecard.collaboration_metrics.agents_run
    );

    if slot.scorecard.set(scorecard).is_err() {
        slot.fail("scorecard already recorded");
        return;
    }
    if let Err(e) = slot.transition(RunStatus::Completed, 100, None) {
        debug!("{}: completion discarded: {}", id, e);
    }
}

/// Turn the run input into a validated request
fn prepare(config: &AgentConfig, input: RunInput) -> Result<AnalysisRequest> {
    let request = match input {
        RunInput::Request(request) => request,
        RunInput::Bundle(bundle) => {
            let mut request = AnalysisRequest::new(bundle.architecture_text)
                .with_services(bundle.detected_services);
            if let Some(csv) = bundle.reactive_csv.filter(|c| !c.trim().is_empty()) {
                let summary = ReactiveAnalyzer::analyze_csv(&csv, config.max_case_records)?;
                request = request.with_reactive(summary);
            }
            request
        }
    };

    request.validate(config.max_input_bytes)?;
    Ok(request)
}
