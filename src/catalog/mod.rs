// Copyright 2025 osmatch developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Tagged-variant registries describing every platform the engine can
//! resolve.
//!
//! A catalog is an ordered list of immutable records: operating systems own
//! their architecture and distribution registries, distributions own their
//! version registry. Registries are built by explicit construction; nothing
//! is enumerated reflectively.

mod common;

pub use common::{common, LSB_RELEASE_PATH, OS_RELEASE_PATH};

use crate::peculiarity::Peculiarity;

/// One level of the catalog: a named variant plus the predicate gating its
/// eligibility.
pub trait CatalogEntry {
    /// The declared identifier, also used by the override grammar.
    fn name(&self) -> &str;

    /// The eligibility predicate; the list evaluates as a conjunction and
    /// an empty list always holds.
    fn peculiarities(&self) -> &[Peculiarity];
}

#[derive(Debug, Clone)]
pub struct OperatingSystem {
    name: &'static str,
    peculiarities: Vec<Peculiarity>,
    architectures: Vec<Architecture>,
    distributions: Vec<Distribution>,
}

impl OperatingSystem {
    pub fn new(
        name: &'static str,
        peculiarities: Vec<Peculiarity>,
        architectures: Vec<Architecture>,
        distributions: Vec<Distribution>,
    ) -> Self {
        OperatingSystem {
            name,
            peculiarities,
            architectures,
            distributions,
        }
    }

    pub fn architectures(&self) -> &[Architecture] {
        &self.architectures
    }

    pub fn distributions(&self) -> &[Distribution] {
        &self.distributions
    }
}

impl CatalogEntry for OperatingSystem {
    fn name(&self) -> &str {
        self.name
    }

    fn peculiarities(&self) -> &[Peculiarity] {
        &self.peculiarities
    }
}

#[derive(Debug, Clone)]
pub struct Architecture {
    name: &'static str,
    peculiarities: Vec<Peculiarity>,
}

impl Architecture {
    pub fn new(name: &'static str, peculiarities: Vec<Peculiarity>) -> Self {
        Architecture {
            name,
            peculiarities,
        }
    }
}

impl CatalogEntry for Architecture {
    fn name(&self) -> &str {
        self.name
    }

    fn peculiarities(&self) -> &[Peculiarity] {
        &self.peculiarities
    }
}

#[derive(Debug, Clone)]
pub struct Distribution {
    name: &'static str,
    peculiarities: Vec<Peculiarity>,
    versions: Vec<Version>,
}

impl Distribution {
    pub fn new(
        name: &'static str,
        peculiarities: Vec<Peculiarity>,
        versions: Vec<Version>,
    ) -> Self {
        Distribution {
            name,
            peculiarities,
            versions,
        }
    }

    pub fn versions(&self) -> &[Version] {
        &self.versions
    }
}

impl CatalogEntry for Distribution {
    fn name(&self) -> &str {
        self.name
    }

    fn peculiarities(&self) -> &[Peculiarity] {
        &self.peculiarities
    }
}

#[derive(Debug, Clone)]
pub struct Version {
    name: &'static str,
    peculiarities: Vec<Peculiarity>,
    priority: i32,
}

impl Version {
    pub fn new(name: &'static str, peculiarities: Vec<Peculiarity>) -> Self {
        Version {
            name,
            peculiarities,
            priority: 0,
        }
    }

    /// A version ranked against its siblings when several are eligible at
    /// once; negative priorities mark weak fallback signals.
    pub fn with_priority(name: &'static str, peculiarities: Vec<Peculiarity>, priority: i32) -> Self {
        Version {
            name,
            peculiarities,
            priority,
        }
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }
}

impl CatalogEntry for Version {
    fn name(&self) -> &str {
        self.name
    }

    fn peculiarities(&self) -> &[Peculiarity] {
        &self.peculiarities
    }
}
