//! Validators registered with the todo dispatcher.

use super::rules::{self, collect};
use crate::pipeline::RequestValidator;
use crate::todo::requests::{CreateTodoCommand, DeleteTodoCommand, UpdateTodoCommand};

/// Rejects create and update payloads whose name is blank.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameRequiredValidator;

impl RequestValidator<CreateTodoCommand> for NameRequiredValidator {
    fn validate(&self, request: &CreateTodoCommand) -> Vec<String> {
        let mut errors = Vec::new();
        collect(&mut errors, rules::validate_name_required(&request.dto().name));
        errors
    }
}

impl RequestValidator<UpdateTodoCommand> for NameRequiredValidator {
    fn validate(&self, request: &UpdateTodoCommand) -> Vec<String> {
        let mut errors = Vec::new();
        collect(&mut errors, rules::validate_name_required(&request.dto().name));
        errors
    }
}

/// Rejects create and update payloads whose name exceeds the storage limit.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameLengthValidator;

impl RequestValidator<CreateTodoCommand> for NameLengthValidator {
    fn validate(&self, request: &CreateTodoCommand) -> Vec<String> {
        let mut errors = Vec::new();
        collect(&mut errors, rules::validate_name_length(&request.dto().name));
        errors
    }
}

impl RequestValidator<UpdateTodoCommand> for NameLengthValidator {
    fn validate(&self, request: &UpdateTodoCommand) -> Vec<String> {
        let mut errors = Vec::new();
        collect(&mut errors, rules::validate_name_length(&request.dto().name));
        errors
    }
}

/// Rejects update and delete requests that target a non-positive id.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdPositiveValidator;

impl RequestValidator<UpdateTodoCommand> for IdPositiveValidator {
    fn validate(&self, request: &UpdateTodoCommand) -> Vec<String> {
        let mut errors = Vec::new();
        collect(&mut errors, rules::validate_id_positive(request.dto().id));
        errors
    }
}

impl RequestValidator<DeleteTodoCommand> for IdPositiveValidator {
    fn validate(&self, request: &DeleteTodoCommand) -> Vec<String> {
        let mut errors = Vec::new();
        collect(&mut errors, rules::validate_id_positive(request.id()));
        errors
    }
}
