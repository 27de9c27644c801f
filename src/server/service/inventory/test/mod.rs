mod record_unit;

use super::*;
use crate::model::inventory::{CreateBloodUnitDto, UnitStatus};
use chrono::{Duration, Utc};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};
