//! Translation of individual health-check results.

use crate::api::HealthCheckResultDto;
use crate::domain::HealthCheckResult;

/// Maps one domain check result to one transfer object.
///
/// Closures of the shape `Fn(&HealthCheckResult) -> HealthCheckResultDto`
/// implement this directly, so callers can inject their own mapping.
pub trait HealthCheckResultTranslator {
    fn map_to_dto(&self, result: &HealthCheckResult) -> HealthCheckResultDto;
}

impl<F> HealthCheckResultTranslator for F
where
    F: Fn(&HealthCheckResult) -> HealthCheckResultDto,
{
    fn map_to_dto(&self, result: &HealthCheckResult) -> HealthCheckResultDto {
        self(result)
    }
}

/// Field-for-field copy, with the check status rendered by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHealthCheckResultTranslator;

impl HealthCheckResultTranslator for DefaultHealthCheckResultTranslator {
    fn map_to_dto(&self, result: &HealthCheckResult) -> HealthCheckResultDto {
        HealthCheckResultDto::new(
            result.name(),
            result.status().name(),
            result.message().map(str::to_string),
            result.duration_ms(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_translator_copies_fields() {
        let result = HealthCheckResult::unhealthy("queue", "connection refused", 12);
        let dto = DefaultHealthCheckResultTranslator.map_to_dto(&result);

        assert_eq!(dto.name, "queue");
        assert_eq!(dto.status, "UNHEALTHY");
        assert_eq!(dto.message.as_deref(), Some("connection refused"));
        assert_eq!(dto.duration_ms, 12);
    }

    #[test]
    fn test_closure_is_a_translator() {
        let translator = |result: &HealthCheckResult| {
            HealthCheckResultDto::new(result.name().to_uppercase(), "CUSTOM", None, 0)
        };
        let dto = translator.map_to_dto(&HealthCheckResult::healthy("db", 1));

        assert_eq!(dto.name, "DB");
        assert_eq!(dto.status, "CUSTOM");
    }
}
