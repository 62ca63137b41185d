//! Named commands, their hot keys and which of them are currently available.
use crate::commands::{CommandArgs, CommandName, CommandOutcome};
use crate::errors::PlotError;
use log::debug;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub type Action<Ctx> = fn(&mut Ctx, CommandArgs) -> Result<CommandOutcome, PlotError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotKey {
    Ctrl(char),
    Return,
}

impl fmt::Display for HotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HotKey::Ctrl(c) => write!(f, "Ctrl+{}", c),
            HotKey::Return => write!(f, "Return"),
        }
    }
}

impl FromStr for HotKey {
    type Err = String;

    /// `Ctrl+A`, `ctrl+a`, `Return`, `Enter`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("return") || s.eq_ignore_ascii_case("enter") {
            return Ok(HotKey::Return);
        }
        let key = s
            .split_once('+')
            .filter(|(modifier, _)| modifier.trim().eq_ignore_ascii_case("ctrl"))
            .map(|(_, key)| key.trim())
            .ok_or_else(|| format!("unknown hot key `{}`", s))?;
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphanumeric() => {
                Ok(HotKey::Ctrl(c.to_ascii_uppercase()))
            }
            _ => Err(format!("unknown hot key `{}`", s)),
        }
    }
}

struct Route<Ctx> {
    action: Action<Ctx>,
    hot_key: Option<HotKey>,
    available: bool,
}

/// Availability is explicit router state; commands are available when registered
/// unless registered with [`CommandRouter::register_unavailable`].
pub struct CommandRouter<Ctx> {
    routes: HashMap<CommandName, Route<Ctx>>,
}

impl<Ctx> Default for CommandRouter<Ctx> {
    fn default() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }
}

impl<Ctx> CommandRouter<Ctx> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: CommandName, action: Action<Ctx>, hot_key: Option<HotKey>) {
        self.insert(name, action, hot_key, true);
    }

    pub fn register_unavailable(
        &mut self,
        name: CommandName,
        action: Action<Ctx>,
        hot_key: Option<HotKey>,
    ) {
        self.insert(name, action, hot_key, false);
    }

    fn insert(
        &mut self,
        name: CommandName,
        action: Action<Ctx>,
        hot_key: Option<HotKey>,
        available: bool,
    ) {
        self.routes.insert(
            name,
            Route {
                action,
                hot_key,
                available,
            },
        );
    }

    pub fn is_registered(&self, name: CommandName) -> bool {
        self.routes.contains_key(&name)
    }

    pub fn availability(&self, name: CommandName) -> bool {
        self.routes.get(&name).is_some_and(|r| r.available)
    }

    pub fn set_available(&mut self, name: CommandName, available: bool) {
        if let Some(route) = self.routes.get_mut(&name) {
            if route.available != available {
                debug!("`{}` is now {}", name, if available { "available" } else { "unavailable" });
            }
            route.available = available;
        }
    }

    pub fn hot_key(&self, name: CommandName) -> Option<HotKey> {
        self.routes.get(&name).and_then(|r| r.hot_key)
    }

    pub fn by_hot_key(&self, key: HotKey) -> Option<CommandName> {
        self.routes
            .iter()
            .find(|(_, r)| r.hot_key == Some(key))
            .map(|(name, _)| *name)
    }

    /// The action to run, or `None` while the command is unavailable.
    pub fn resolve(&self, name: CommandName) -> Result<Option<Action<Ctx>>, PlotError> {
        let route = self
            .routes
            .get(&name)
            .ok_or_else(|| PlotError::UnknownCommand(name.to_string()))?;
        Ok(route.available.then_some(route.action))
    }
}
