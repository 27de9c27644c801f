mod delete;
mod get_all;

use super::*;
use chrono::Duration;
use test_utils::{builder::TestBuilder, factory};
