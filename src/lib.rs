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

//! Host platform detection by declarative rule matching.
//!
//! A catalog of operating systems, architectures, distributions and versions
//! declares, per variant, the peculiarities (fact predicates) that make it
//! eligible. Resolving a platform walks the catalog, evaluates every
//! peculiarity against observed facts (system properties, release files) and
//! assembles a [`Platform`] from the surviving variants.

pub mod attributes;
pub mod catalog;
pub mod error;
pub mod inspector;
pub mod logging;
pub mod matcher;
pub mod peculiarity;
pub mod platform;
pub mod types;

pub use error::{OsMatchError, Result};
pub use platform::{AmbiguityNote, Detection, Platform, Stage};
