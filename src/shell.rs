//! Top-level shell: menu/mode switching, difficulty selection, mascot
//! message routing, and first-visit intro + tutorial wiring around the
//! active [`GameSession`].

use crate::feedback::{mascot_message, GREETING};
use crate::game_engine::models::{Answer, Difficulty, GameKind};
use crate::session::{AdvanceToken, GameSession, SubmitResult};
use crate::tutorial::geometry::Viewport;
use crate::tutorial::steps::{intro_for, steps_for, IntroCard};
use crate::tutorial::store::SeenStore;
use crate::tutorial::{AnchorResolver, StepLayout, TutorialSequencer, TutorialState};

/// Everything alive while one game is mounted.
struct ActiveGame {
    session: GameSession,
    /// First-visit "How to Play" modal.
    intro_open: bool,
    tutorial: TutorialSequencer,
}

pub struct AppShell<S: SeenStore> {
    store: S,
    difficulty: Difficulty,
    mascot_message: String,
    active: Option<ActiveGame>,
}

impl<S: SeenStore> AppShell<S> {
    pub fn new(store: S) -> Self {
        AppShell {
            store,
            difficulty: Difficulty::Easy,
            mascot_message: GREETING.to_string(),
            active: None,
        }
    }

    /// `None` means the menu is showing.
    pub fn mode(&self) -> Option<GameKind> {
        self.active.as_ref().map(|a| a.session.game())
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn mascot_message(&self) -> &str {
        &self.mascot_message
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.active.as_ref().map(|a| a.session())
    }

    pub fn intro_open(&self) -> bool {
        self.active.as_ref().map(|a| a.intro_open).unwrap_or(false)
    }

    pub fn intro_card(&self) -> Option<IntroCard> {
        let active = self.active.as_ref()?;
        active.intro_open.then(|| intro_for(active.session.game()))
    }

    pub fn tutorial_state(&self) -> TutorialState {
        self.active
            .as_ref()
            .map(|a| a.tutorial.state())
            .unwrap_or(TutorialState::Inactive)
    }

    pub fn tutorial(&self) -> Option<&TutorialSequencer> {
        self.active.as_ref().map(|a| &a.tutorial)
    }

    /// Mount a game. Raises the intro modal when this game's tutorial has
    /// never been completed.
    pub fn enter(&mut self, game: GameKind) {
        let session = GameSession::new(game, self.difficulty);
        self.enter_with(session);
    }

    /// Deterministic variant for tests and demos.
    pub fn enter_seeded(&mut self, game: GameKind, seed: u64) {
        let session = GameSession::with_seed(game, self.difficulty, seed);
        self.enter_with(session);
    }

    fn enter_with(&mut self, session: GameSession) {
        let game = session.game();
        let tutorial = TutorialSequencer::new(game, steps_for(game, session.problem()));
        self.mascot_message = session.problem().prompt.clone();
        self.active = Some(ActiveGame {
            session,
            intro_open: !self.store.get(game.key()),
            tutorial,
        });
    }

    /// Unmount the active game. Any pending celebration token dies with
    /// the session it pointed at.
    pub fn exit_to_menu(&mut self) {
        self.active = None;
        self.mascot_message = mascot_message(None).to_string();
    }

    /// Close the intro modal; first-time visitors fall through into the
    /// guided walkthrough.
    pub fn dismiss_intro(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.intro_open = false;
        active.tutorial.start_if_unseen(&self.store);
    }

    /// Advance the walkthrough one step; completing it records the seen
    /// flag durably.
    pub fn acknowledge_tutorial(&mut self) -> TutorialState {
        match self.active.as_mut() {
            Some(active) => active.tutorial.acknowledge(&mut self.store),
            None => TutorialState::Inactive,
        }
    }

    /// "How to play" button: rebuild the steps against the problem on
    /// screen (counting's cell anchor moves) and re-enter step 0.
    pub fn replay_tutorial(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let game = active.session.game();
        active.tutorial = TutorialSequencer::new(game, steps_for(game, active.session.problem()));
        active.tutorial.replay();
    }

    pub fn tutorial_layout(
        &self,
        resolver: &impl AnchorResolver,
        viewport: Viewport,
    ) -> StepLayout {
        match self.active.as_ref() {
            Some(active) => active.tutorial.layout(resolver, viewport),
            None => StepLayout::Hidden,
        }
    }

    /// Submit an answer for the active game. Swallowed (None) while the
    /// tutorial overlay is up or a celebration is in flight; otherwise the
    /// outcome's feedback line becomes the mascot message.
    pub fn submit(&mut self, answer: &Answer) -> Option<SubmitResult> {
        let active = self.active.as_mut()?;
        if active.tutorial.is_active() {
            return None;
        }
        let result = active.session.submit(answer)?;
        self.mascot_message = result.feedback.to_string();
        Some(result)
    }

    /// Celebration timer callback. True when the session actually moved
    /// on; the new problem's prompt takes over the mascot.
    pub fn advance(&mut self, token: AdvanceToken) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if !active.session.advance(token) {
            return false;
        }
        self.mascot_message = active.session.problem().prompt.clone();
        true
    }

    /// Skip/refresh the current problem.
    pub fn refresh(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.session.refresh();
        self.mascot_message = active.session.problem().prompt.clone();
    }

    /// Difficulty buttons on the menu bar; an active session restarts its
    /// run at the new tier.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.session.set_difficulty(difficulty);
        self.mascot_message = active.session.problem().prompt.clone();
    }

    /// Tapping the mascot repeats the contextual instruction.
    pub fn mascot_clicked(&mut self) {
        self.mascot_message = mascot_message(self.mode()).to_string();
    }
}

impl ActiveGame {
    fn session(&self) -> &GameSession {
        &self.session
    }
}
