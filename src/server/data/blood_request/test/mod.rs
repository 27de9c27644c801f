mod create;
mod get_all;

use super::*;
use crate::model::request::{RequestPriority, RequestStatus};
use chrono::Duration;
use test_utils::{builder::TestBuilder, factory};
