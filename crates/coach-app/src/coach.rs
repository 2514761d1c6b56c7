//! The coaching loop: poll, estimate, plan, advise.
//!
//! Each poll pulls a snapshot from the game-state source and feeds the
//! two advisory pipelines on their own cooldowns:
//!
//! - **farming** (every `farm_interval`): danger estimate -> route plan
//!   -> best-next recommendation -> farming advice (or an informational
//!   notice when no spot is safe);
//! - **strategy** (every `strategy_interval`): strategist analysis ->
//!   the top tip as advice.
//!
//! Nothing in the loop is fatal. Sources fall back internally, strategist
//! failures are logged and skipped, and the worst outcome of a tick is
//! "no new advice". The loop owns all of its state; advice leaves it by
//! value through the panel.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use coach_core::{RouteOptimizer, estimate_danger};
use coach_overlay::AdvicePanel;
use coach_state::GameStateSource;
use coach_strategist::Strategist;
use coach_types::{Advice, AdviceCategory, GameState};

/// How long farming advice stays on the panel.
const FARM_ADVICE_SECS: u64 = 8;

/// How long strategy advice stays on the panel.
const STRATEGY_ADVICE_SECS: u64 = 6;

/// How long the welcome and goodbye notices stay on the panel.
const NOTICE_SECS: u64 = 4;

/// The coach: wiring between source, core, strategist, and panel.
pub struct Coach {
    source: GameStateSource,
    strategist: Strategist,
    optimizer: RouteOptimizer,
    panel: AdvicePanel,
    poll_interval: Duration,
    farm_interval: Duration,
    strategy_interval: Duration,
    last_farm_at: Option<Instant>,
    last_strategy_at: Option<Instant>,
}

impl Coach {
    /// Wire up a coach from its collaborators.
    pub const fn new(
        source: GameStateSource,
        strategist: Strategist,
        optimizer: RouteOptimizer,
        panel: AdvicePanel,
        poll_interval: Duration,
        farm_interval: Duration,
        strategy_interval: Duration,
    ) -> Self {
        Self {
            source,
            strategist,
            optimizer,
            panel,
            poll_interval,
            farm_interval,
            strategy_interval,
            last_farm_at: None,
            last_strategy_at: None,
        }
    }

    /// Run the coaching loop until ctrl-c.
    pub async fn run(&mut self) {
        self.panel.show(
            Advice::new(
                "Match detected.\nI'll follow the game and share tips",
                AdviceCategory::Strategy,
                8,
                Duration::from_secs(NOTICE_SECS),
            )
            .with_icon("\u{1f3ae}"),
        );

        let mut ticker = tokio::time::interval(self.poll_interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.tick().await;
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("coach stopped by user");
                    self.panel.show(Advice::new(
                        "See you on the battlefield!",
                        AdviceCategory::Strategy,
                        5,
                        Duration::from_secs(NOTICE_SECS),
                    ));
                    self.panel.refresh(Instant::now());
                    info!(panel = %self.panel.render(), "final panel state");
                    return;
                }
            }
        }
    }

    /// One poll: snapshot, cooldown-gated analyses, panel refresh.
    async fn tick(&mut self) {
        let state = self.source.snapshot().await;
        if !state.hero_name.is_empty() {
            self.panel.set_hero(&state.hero_name, "\u{1f3ae}");
        }

        let now = Instant::now();
        if cooldown_elapsed(self.last_farm_at, self.farm_interval, now) {
            self.farm_tick(&state);
            self.last_farm_at = Some(now);
        }
        if cooldown_elapsed(self.last_strategy_at, self.strategy_interval, now) {
            self.strategy_tick(&state).await;
            self.last_strategy_at = Some(now);
        }

        if self.panel.refresh(Instant::now()).is_some() {
            info!(panel = %self.panel.render(), "panel updated");
        }
    }

    /// Farming pipeline: danger -> plan -> recommendation -> advice.
    fn farm_tick(&mut self, state: &GameState) {
        let danger = estimate_danger(state);
        debug!(danger, "danger level estimated");

        let plan_is_empty = self
            .optimizer
            .plan_route(state.hero_position, danger)
            .is_empty();

        if plan_is_empty {
            // Informational, not alarming: there is simply nothing safe
            // to farm until the map calms down.
            self.panel.show(Advice::new(
                "No safe farming spot right now.\nPlay safe until the map calms down",
                AdviceCategory::Farming,
                3,
                Duration::from_secs(NOTICE_SECS),
            ));
            return;
        }

        if let Some(rec) = self.optimizer.next_spot() {
            info!(
                spot = %rec.spot_name,
                distance = rec.distance,
                "farming recommendation"
            );
            let text = format!(
                "{}\n\u{1f4b0} {:.0} GPM\n\u{23f1} {:.0}s to clear",
                rec.text, rec.gold_per_minute, rec.time_to_clear
            );
            self.panel.show(Advice::new(
                text,
                AdviceCategory::Farming,
                7,
                Duration::from_secs(FARM_ADVICE_SECS),
            ));
        }
    }

    /// Strategy pipeline: analysis -> top tip -> advice.
    async fn strategy_tick(&mut self, state: &GameState) {
        match self.strategist.analyze(state).await {
            Ok(tips) => {
                if let Some(top) = tips.first() {
                    info!(title = %top.title, priority = top.priority, "strategy tip");
                    self.panel.show(Advice::new(
                        top.advice.clone(),
                        top.category,
                        top.priority,
                        Duration::from_secs(STRATEGY_ADVICE_SECS),
                    ));
                }
            }
            Err(e) => {
                warn!(error = %e, "strategic analysis failed this tick");
            }
        }
    }
}

/// Whether a cooldown window has elapsed (or never started).
fn cooldown_elapsed(last: Option<Instant>, interval: Duration, now: Instant) -> bool {
    last.is_none_or(|at| now.duration_since(at) >= interval)
}

#[cfg(test)]
mod tests {
    use coach_core::known_spots;
    use coach_overlay::PanelPosition;
    use coach_state::{DataSource, SourceConfig, create_source};
    use coach_strategist::RuleStrategist;
    use coach_types::EnemyState;

    use super::*;

    fn test_coach() -> Coach {
        let source = create_source(&SourceConfig {
            data_source: DataSource::Local,
            steam_id: None,
            use_live: false,
            seed: 42,
        });
        Coach::new(
            source,
            Strategist::Rules(RuleStrategist::new()),
            RouteOptimizer::new(known_spots()),
            AdvicePanel::new(PanelPosition::TopRight),
            Duration::from_secs(5),
            Duration::from_secs(15),
            Duration::from_secs(30),
        )
    }

    fn lethal_state() -> GameState {
        // Five visible, massively overleveled enemies: danger clamps to 1.
        let enemies = (0..5)
            .map(|i| EnemyState {
                name: format!("e{i}"),
                level: 25,
                role: String::from("core"),
                visible: true,
            })
            .collect();
        GameState {
            level: 1,
            enemies,
            ..GameState::default()
        }
    }

    #[test]
    fn farm_tick_queues_a_recommendation() {
        let mut coach = test_coach();
        let state = GameState {
            hero_name: String::from("Anti-Mage"),
            hp: 500,
            max_hp: 500,
            ..GameState::default()
        };
        coach.farm_tick(&state);

        let shown = coach.panel.refresh(Instant::now()).cloned();
        assert!(shown.is_some());
        if let Some(advice) = shown {
            assert_eq!(advice.category, AdviceCategory::Farming);
            assert_eq!(advice.priority, 7);
            assert!(advice.text.contains("GPM"));
        }
    }

    #[test]
    fn lethal_danger_queues_the_informational_notice() {
        let mut coach = test_coach();
        coach.farm_tick(&lethal_state());

        let shown = coach.panel.refresh(Instant::now()).cloned();
        assert!(shown.is_some());
        if let Some(advice) = shown {
            assert_eq!(advice.priority, 3);
            assert!(advice.text.contains("No safe farming spot"));
        }
    }

    #[tokio::test]
    async fn strategy_tick_queues_the_top_tip() {
        let mut coach = test_coach();
        let state = GameState {
            game_time_min: 15,
            hp: 100,
            max_hp: 500,
            gold: 2000,
            items: vec![String::from("Power Treads")],
            ..GameState::default()
        };
        coach.strategy_tick(&state).await;

        let shown = coach.panel.refresh(Instant::now()).cloned();
        assert!(shown.is_some());
        if let Some(advice) = shown {
            // The rule table's top tip for low HP is the danger warning.
            assert_eq!(advice.category, AdviceCategory::Danger);
            assert_eq!(advice.priority, 9);
        }
    }

    #[tokio::test]
    async fn tick_polls_and_advises_end_to_end() {
        let mut coach = test_coach();
        coach.tick().await;

        // First tick runs both pipelines and shows something.
        assert!(coach.panel.visible().is_some());
        // The simulated hero made it into the header.
        assert!(coach.panel.render().contains("Anti-Mage"));
    }

    #[test]
    fn cooldowns_gate_repeat_analysis() {
        let now = Instant::now();
        assert!(cooldown_elapsed(None, Duration::from_secs(15), now));
        assert!(!cooldown_elapsed(
            Some(now),
            Duration::from_secs(15),
            now + Duration::from_secs(5)
        ));
        assert!(cooldown_elapsed(
            Some(now),
            Duration::from_secs(15),
            now + Duration::from_secs(15)
        ));
    }
}
