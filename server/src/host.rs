use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex};

use game::api::{Action, ActionError, Event};
use game::collections::Sequence;
use game::config::Rules;
use game::data::DataError;
use game::knowledge::Knowledge;
use game::model::Farm;
use game::persistence::{FarmStorage, MemoryStorage, SqliteStorage};
use game::{Game, Timestamp, DEMO_OWNER};
use log::{error, info, warn};
use prometheus::Registry;

use crate::{Authenticator, Configuration, HostMetrics, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub usize);

#[derive(Debug)]
pub enum HostError {
    SessionNotFound { session: SessionId },
    Action(ActionError),
    Storage(DataError),
    Metrics(prometheus::Error),
    Poisoned,
}

impl Display for HostError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HostError::SessionNotFound { session } => write!(f, "session {:?} not found", session),
            HostError::Action(error) => write!(f, "action rejected: {:?}", error),
            HostError::Storage(error) => write!(f, "{}", error),
            HostError::Metrics(error) => write!(f, "metrics unavailable: {}", error),
            HostError::Poisoned => write!(f, "farm lock poisoned"),
        }
    }
}

impl Error for HostError {}

impl From<ActionError> for HostError {
    fn from(error: ActionError) -> Self {
        Self::Action(error)
    }
}

impl From<DataError> for HostError {
    fn from(error: DataError) -> Self {
        Self::Storage(error)
    }
}

type SharedStorage = Arc<Mutex<Box<dyn FarmStorage>>>;

enum SessionStorage {
    Persistent(SharedStorage),
    Demo(MemoryStorage),
}

struct Session {
    game: Game,
    storage: SessionStorage,
    /// Storage lags behind the game after interrupted write back.
    dirty: bool,
}

impl Session {
    fn new(game: Game, storage: SessionStorage) -> Self {
        Self {
            game,
            storage,
            dirty: false,
        }
    }

    fn save_changes(&mut self, events: &[Event], now: Timestamp) -> Result<(), HostError> {
        let game = &self.game;
        let dirty = self.dirty;
        let save = |storage: &mut dyn FarmStorage| {
            if dirty {
                game.save_all(storage, now)
            } else {
                game.save_changes(storage, events, now)
            }
        };
        let result = match &mut self.storage {
            SessionStorage::Persistent(storage) => {
                let mut storage = storage.lock().map_err(|_| HostError::Poisoned)?;
                save(storage.as_mut())
            }
            SessionStorage::Demo(storage) => save(storage),
        };
        match result {
            Ok(()) => {
                if self.dirty {
                    info!("Farm {:?} storage caught up", self.game.profile.id);
                }
                self.dirty = false;
                Ok(())
            }
            Err(error) => {
                error!(
                    "Unable to save changes of farm {:?}, {}",
                    self.game.profile.id, error
                );
                self.dirty = true;
                Err(HostError::Storage(error))
            }
        }
    }
}

#[derive(Default)]
struct Sessions {
    sessions_id: Sequence,
    entries: HashMap<SessionId, Arc<Mutex<Session>>>,
    owners: HashMap<String, SessionId>,
}

/// Serves farms of many players, one action at a time per farm.
pub struct FarmHost {
    known: Knowledge,
    rules: Rules,
    storage: Option<SharedStorage>,
    sessions: Mutex<Sessions>,
    metrics: HostMetrics,
}

impl FarmHost {
    pub fn new(
        known: Knowledge,
        rules: Rules,
        storage: Option<Box<dyn FarmStorage>>,
        registry: &Registry,
    ) -> Result<Self, HostError> {
        let metrics = HostMetrics::new(registry).map_err(HostError::Metrics)?;
        Ok(Self {
            known,
            rules,
            storage: storage.map(|storage| Arc::new(Mutex::new(storage))),
            sessions: Mutex::new(Sessions::default()),
            metrics,
        })
    }

    /// Unavailable database degrades host to demo sessions only.
    pub fn from_configuration(
        configuration: Configuration,
        known: Knowledge,
        registry: &Registry,
    ) -> Result<Self, HostError> {
        let storage = match &configuration.database {
            Some(path) => match SqliteStorage::open(path) {
                Ok(storage) => Some(Box::new(storage) as Box<dyn FarmStorage>),
                Err(error) => {
                    warn!("Unable to open farms database {:?}, {}", path, error);
                    None
                }
            },
            None => {
                info!("No farms database configured, only demo sessions available");
                None
            }
        };
        Self::new(known, configuration.rules, storage, registry)
    }

    pub fn open_session(
        &self,
        auth: &dyn Authenticator,
        now: Timestamp,
    ) -> Result<SessionId, HostError> {
        let user = match auth.current_user() {
            Some(user) if auth.has_session() => user,
            _ => return self.open_demo(now),
        };
        let storage = match &self.storage {
            Some(storage) => storage.clone(),
            None => return self.open_demo(now),
        };
        {
            let sessions = self.sessions.lock().map_err(|_| HostError::Poisoned)?;
            if let Some(session) = sessions.owners.get(&user.id) {
                return Ok(*session);
            }
        }
        let opened = {
            let mut storage = storage.lock().map_err(|_| HostError::Poisoned)?;
            Game::open(
                storage.as_mut(),
                self.known.clone(),
                self.rules.clone(),
                &user.id,
                &self.farm_name(&user),
                false,
                now,
            )
        };
        match opened {
            Ok(game) => {
                info!("Session of {} opened on farm {:?}", user.id, game.profile.id);
                let session = Session::new(game, SessionStorage::Persistent(storage));
                self.register(session, Some(user.id))
            }
            Err(error) => {
                warn!(
                    "Unable to open farm of {}, {}, falling back to demo",
                    user.id, error
                );
                self.open_demo(now)
            }
        }
    }

    fn open_demo(&self, now: Timestamp) -> Result<SessionId, HostError> {
        let mut storage = MemoryStorage::default();
        let game = Game::open(
            &mut storage,
            self.known.clone(),
            self.rules.clone(),
            DEMO_OWNER,
            &self.rules.fallback_farm_name,
            true,
            now,
        )?;
        self.metrics.demo_sessions.inc();
        info!("Demo session opened");
        let session = Session::new(game, SessionStorage::Demo(storage));
        self.register(session, None)
    }

    fn register(&self, session: Session, owner: Option<String>) -> Result<SessionId, HostError> {
        let mut sessions = self.sessions.lock().map_err(|_| HostError::Poisoned)?;
        if let Some(owner) = &owner {
            if let Some(id) = sessions.owners.get(owner) {
                return Ok(*id);
            }
        }
        let id = sessions.sessions_id.one(SessionId);
        sessions.entries.insert(id, Arc::new(Mutex::new(session)));
        if let Some(owner) = owner {
            sessions.owners.insert(owner, id);
        }
        Ok(id)
    }

    fn farm_name(&self, user: &User) -> String {
        match &user.display_name {
            Some(name) if !name.trim().is_empty() => format!("{}'s farm", name.trim()),
            _ => self.rules.fallback_farm_name.clone(),
        }
    }

    fn session(&self, id: SessionId) -> Result<Arc<Mutex<Session>>, HostError> {
        let sessions = self.sessions.lock().map_err(|_| HostError::Poisoned)?;
        sessions
            .entries
            .get(&id)
            .cloned()
            .ok_or(HostError::SessionNotFound { session: id })
    }

    pub fn perform(
        &self,
        session: SessionId,
        action: Action,
        now: Timestamp,
    ) -> Result<Vec<Event>, HostError> {
        let session = self.session(session)?;
        let mut session = session.lock().map_err(|_| HostError::Poisoned)?;
        self.metrics
            .actions
            .with_label_values(&[action.name()])
            .inc();
        let events = match session.game.perform_action(action, now) {
            Ok(events) => events,
            Err(error) => {
                let kind = format!("{:?}", error.kind());
                self.metrics
                    .action_errors
                    .with_label_values(&[&kind])
                    .inc();
                return Err(error.into());
            }
        };
        session.save_changes(&events, now)?;
        Ok(events)
    }

    pub fn look_around(&self, session: SessionId, now: Timestamp) -> Result<Vec<Event>, HostError> {
        let session = self.session(session)?;
        let session = session.lock().map_err(|_| HostError::Poisoned)?;
        Ok(session.game.look_around(now))
    }

    pub fn farm(&self, session: SessionId) -> Result<Farm, HostError> {
        let session = self.session(session)?;
        let session = session.lock().map_err(|_| HostError::Poisoned)?;
        Ok(session.game.farm())
    }

    pub fn is_demo(&self, session: SessionId) -> Result<bool, HostError> {
        let session = self.session(session)?;
        let session = session.lock().map_err(|_| HostError::Poisoned)?;
        Ok(matches!(session.storage, SessionStorage::Demo(_)))
    }

    pub fn close_session(&self, session: SessionId) -> Result<(), HostError> {
        let mut sessions = self.sessions.lock().map_err(|_| HostError::Poisoned)?;
        if sessions.entries.remove(&session).is_none() {
            return Err(HostError::SessionNotFound { session });
        }
        sessions.owners.retain(|_, id| *id != session);
        info!("Session {:?} closed", session);
        Ok(())
    }
}
