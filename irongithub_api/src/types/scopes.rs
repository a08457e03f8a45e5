//! OAuth scopes and their JSON representation.
//!
//! A [`Scopes`] value is written as a JSON array of scope names
//! (`["repo","gist"]`). It is read back from that array or from the
//! comma-separated form GitHub uses in the `X-OAuth-Scopes` header.

use std::collections::BTreeSet;
use std::convert::Infallible;
use std::str::FromStr;

use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single OAuth permission scope.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scope {
    User,
    UserEmail,
    UserFollow,
    PublicRepo,
    Repo,
    RepoDeployment,
    RepoStatus,
    DeleteRepo,
    Notifications,
    Gist,
    ReadOrg,
    WriteOrg,
    AdminOrg,
    ReadPublicKey,
    WritePublicKey,
    AdminPublicKey,
    AdminRepoHook,
    AdminOrgHook,
    /// A scope this crate does not know by name. Kept verbatim.
    Other(String),
}

impl Scope {
    pub fn as_str(&self) -> &str {
        match self {
            Scope::User => "user",
            Scope::UserEmail => "user:email",
            Scope::UserFollow => "user:follow",
            Scope::PublicRepo => "public_repo",
            Scope::Repo => "repo",
            Scope::RepoDeployment => "repo_deployment",
            Scope::RepoStatus => "repo:status",
            Scope::DeleteRepo => "delete_repo",
            Scope::Notifications => "notifications",
            Scope::Gist => "gist",
            Scope::ReadOrg => "read:org",
            Scope::WriteOrg => "write:org",
            Scope::AdminOrg => "admin:org",
            Scope::ReadPublicKey => "read:public_key",
            Scope::WritePublicKey => "write:public_key",
            Scope::AdminPublicKey => "admin:public_key",
            Scope::AdminRepoHook => "admin:repo_hook",
            Scope::AdminOrgHook => "admin:org_hook",
            Scope::Other(name) => name,
        }
    }

    /// Maps `Other` holding a known name onto its named variant.
    fn normalized(self) -> Self {
        match self {
            Scope::Other(name) => Scope::from(name.as_str()),
            known => known,
        }
    }
}

impl From<&str> for Scope {
    fn from(name: &str) -> Self {
        match name {
            "user" => Scope::User,
            "user:email" => Scope::UserEmail,
            "user:follow" => Scope::UserFollow,
            "public_repo" => Scope::PublicRepo,
            "repo" => Scope::Repo,
            "repo_deployment" => Scope::RepoDeployment,
            "repo:status" => Scope::RepoStatus,
            "delete_repo" => Scope::DeleteRepo,
            "notifications" => Scope::Notifications,
            "gist" => Scope::Gist,
            "read:org" => Scope::ReadOrg,
            "write:org" => Scope::WriteOrg,
            "admin:org" => Scope::AdminOrg,
            "read:public_key" => Scope::ReadPublicKey,
            "write:public_key" => Scope::WritePublicKey,
            "admin:public_key" => Scope::AdminPublicKey,
            "admin:repo_hook" => Scope::AdminRepoHook,
            "admin:org_hook" => Scope::AdminOrgHook,
            other => Scope::Other(other.to_string()),
        }
    }
}

impl FromStr for Scope {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Scope::from(s))
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Scope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Scope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Scope::from(name.as_str()))
    }
}

/// A set of OAuth scopes. Every scope is stored under its named variant
/// when it has one, so a name appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scopes(BTreeSet<Scope>);

impl Scopes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, scope: Scope) -> Self {
        self.insert(scope);
        self
    }

    pub fn insert(&mut self, scope: Scope) -> bool {
        self.0.insert(scope.normalized())
    }

    pub fn contains(&self, scope: &Scope) -> bool {
        self.0.contains(&scope.clone().normalized())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scope> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Scope> for Scopes {
    fn from_iter<I: IntoIterator<Item = Scope>>(iter: I) -> Self {
        Self(iter.into_iter().map(Scope::normalized).collect())
    }
}

impl IntoIterator for Scopes {
    type Item = Scope;
    type IntoIter = std::collections::btree_set::IntoIter<Scope>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Scopes {
    type Item = &'a Scope;
    type IntoIter = std::collections::btree_set::Iter<'a, Scope>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Parses the comma-separated header form, e.g. `"repo, user:email"`.
impl FromStr for Scopes {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(split_scope_list(s))
    }
}

/// Formats as the comma-separated header form.
impl std::fmt::Display for Scopes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, scope) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", scope)?;
        }
        Ok(())
    }
}

impl Serialize for Scopes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for scope in &self.0 {
            seq.serialize_element(scope.as_str())?;
        }
        seq.end()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ScopesRepr {
    List(Vec<Scope>),
    Joined(String),
}

impl<'de> Deserialize<'de> for Scopes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match ScopesRepr::deserialize(deserializer)? {
            ScopesRepr::List(list) => list.into_iter().collect(),
            ScopesRepr::Joined(joined) => split_scope_list(&joined),
        })
    }
}

fn split_scope_list(s: &str) -> Scopes {
    s.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(Scope::from)
        .collect()
}
