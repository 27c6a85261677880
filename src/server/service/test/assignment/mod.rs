use crate::server::{error::AppError, service::assignment::AssignmentService};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod unassign;
