// Refresh loop - fetch, compute, render, sleep, repeat
use std::io::Write;
use std::time::Duration;

use crate::client::AccountApi;
use crate::config::DisplayConfig;
use crate::errors::{Result, TrackerError};
use crate::models::*;
use crate::operations::{compute_stats, InventoryAggregator, ItemResolver, ReportRenderer};
use crate::targets::TargetConfiguration;
use crate::verbosity::{format_countdown, status_line};
use crate::{v_debug, v_info, REQUIRED_PERMISSIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Init,
    FetchAndRender,
    Sleeping,
    Done,
}

/// Fails unless the key is valid and grants every permission in
/// `REQUIRED_PERMISSIONS`.
pub async fn verify_token(api: &dyn AccountApi) -> Result<TokenInfo> {
    let info = api.token_info().await?;
    let missing: Vec<&str> = REQUIRED_PERMISSIONS
        .iter()
        .copied()
        .filter(|needed| !info.permissions.iter().any(|granted| granted == needed))
        .collect();

    if !missing.is_empty() {
        return Err(TrackerError::Credential(format!(
            "insufficient permissions, set your API key permissions to at least {:?} (missing {:?})",
            REQUIRED_PERMISSIONS, missing
        )));
    }
    v_info!("✅ API key {} accepted", info.name);
    Ok(info)
}

pub struct RefreshLoop<'a, W: Write> {
    api: &'a dyn AccountApi,
    targets: &'a TargetConfiguration,
    renderer: ReportRenderer,
    refresh_seconds: u64,
    max_cycles: Option<u32>,
    out: W,
    state: LoopState,
    cycles: u32,
}

impl<'a, W: Write> RefreshLoop<'a, W> {
    pub fn new(
        api: &'a dyn AccountApi,
        targets: &'a TargetConfiguration,
        display: &DisplayConfig,
        out: W,
    ) -> Self {
        Self {
            api,
            targets,
            renderer: ReportRenderer::new(display.grouped),
            refresh_seconds: display.refresh_seconds,
            max_cycles: None,
            out,
            state: LoopState::Init,
            cycles: 0,
        }
    }

    /// Stop after `cycles` renders even when refreshing is enabled.
    pub fn with_max_cycles(mut self, cycles: Option<u32>) -> Self {
        self.max_cycles = cycles;
        self
    }

    /// Skip the credential check when the caller already ran `verify_token`.
    pub fn token_verified(mut self) -> Self {
        if self.state == LoopState::Init {
            self.state = LoopState::FetchAndRender;
        }
        self
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Number of completed renders.
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Currency stats and material stats for the current account state.
    pub async fn fetch_stats(&self) -> Result<(Vec<ProgressStat>, Vec<ProgressStat>)> {
        let aggregator = InventoryAggregator::new(self.api);
        let resolver = ItemResolver::new(self.api);

        let wallet = aggregator.wallet(&self.targets.currency_ids()).await?;
        status_line("[2/8]: Resolving all currency names...");
        let currencies = resolver.resolve_all(ItemKind::Currency, &wallet).await?;

        let held = aggregator.aggregate(&self.targets.material_ids()).await?;
        status_line("[8/8]: Resolving all item names...");
        let materials = resolver.resolve_all(ItemKind::Material, &held).await?;

        Ok((
            compute_stats(&self.targets.currencies, &currencies),
            compute_stats(&self.targets.materials, &materials),
        ))
    }

    /// Advance the state machine by one transition.
    pub async fn step(&mut self) -> Result<LoopState> {
        self.state = match self.state {
            LoopState::Init => {
                verify_token(self.api).await?;
                LoopState::FetchAndRender
            }
            LoopState::FetchAndRender => {
                let (currencies, materials) = self.fetch_stats().await?;
                self.renderer
                    .render(&mut self.out, self.targets, &currencies, &materials)?;
                self.cycles += 1;
                v_debug!("🔄 Render {} complete", self.cycles);

                let limit_reached = self.max_cycles.is_some_and(|max| self.cycles >= max);
                if self.refresh_seconds == 0 || limit_reached {
                    LoopState::Done
                } else {
                    LoopState::Sleeping
                }
            }
            LoopState::Sleeping => {
                pause(self.refresh_seconds).await;
                LoopState::FetchAndRender
            }
            LoopState::Done => LoopState::Done,
        };
        Ok(self.state)
    }

    /// Run until done. Any failure aborts the run without rendering.
    pub async fn run(&mut self) -> Result<u32> {
        while self.step().await? != LoopState::Done {}
        Ok(self.cycles)
    }
}

/// Block for `seconds`, showing a countdown on the status line.
pub async fn pause(seconds: u64) {
    let mut remaining = seconds;
    while remaining > 0 {
        status_line(&format!("(Refreshing in {})", format_countdown(remaining)));
        tokio::time::sleep(Duration::from_secs(1)).await;
        remaining -= 1;
    }
    status_line("Refreshing...");
}
