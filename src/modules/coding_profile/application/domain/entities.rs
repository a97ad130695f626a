// src/modules/coding_profile/application/domain/entities.rs
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Competitive programming platforms. A profile is keyed by its platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Platform {
    LeetCode,
    CodeChef,
    HackerRank,
    GeeksforGeeks,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::LeetCode,
        Platform::CodeChef,
        Platform::HackerRank,
        Platform::GeeksforGeeks,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Platform::LeetCode => "LeetCode",
            Platform::CodeChef => "CodeChef",
            Platform::HackerRank => "HackerRank",
            Platform::GeeksforGeeks => "GeeksforGeeks",
        }
    }

    pub fn default_logo(&self) -> &'static str {
        match self {
            Platform::LeetCode => "https://leetcode.com/static/images/favicon.png",
            Platform::CodeChef => "https://www.codechef.com/misc/favicon.ico",
            Platform::HackerRank => "https://www.hackerrank.com/favicon.ico",
            Platform::GeeksforGeeks => "https://media.geeksforgeeks.org/gfg-gg-logo.svg",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.name() == s.trim())
            .ok_or_else(|| format!("unknown platform '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProfileStats {
    pub solved: u32,
    pub contests: u32,
    pub rating: u32,
    pub badges: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CodingProfile {
    pub id: Option<String>,
    pub platform: Platform,
    pub username: String,
    pub profile_url: String,
    pub icon_url: Option<String>,
    pub stats: ProfileStats,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl CodingProfile {
    pub fn touched_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at.or(self.created_at)
    }

    pub fn logo(&self) -> &str {
        self.icon_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| self.platform.default_logo())
    }
}
