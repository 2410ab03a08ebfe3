//! Scenario rendering: one (input, output) column pair → one Gherkin block

use crate::config::SpecflowConfig;
use crate::error::SpecflowResult;
use crate::types::{Assertion, InputEntry, OutputEntry, ParameterMap, RequestType, TestCase};

pub const SMOKE_TAG: &str = "@SmokeTest";
pub const REGRESSION_TAG: &str = "@RegressionTest";
pub const HTTP_VERB: &str = "POST";

const STATUS_CODE_PHRASE: &str = "responsecode";

/// Tag line implied by the case-name prefix
pub fn scenario_tag(case_name: &str, config: &SpecflowConfig) -> Option<&'static str> {
    if case_name.starts_with(&config.smoke_prefix) {
        Some(SMOKE_TAG)
    } else if case_name.starts_with(&config.regression_prefix) {
        Some(REGRESSION_TAG)
    } else {
        None
    }
}

/// True when the expression reads "response code", ignoring case and spacing
pub fn is_status_code(expression: &str) -> bool {
    let squashed: String = expression
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    squashed.starts_with(STATUS_CODE_PHRASE)
}

fn assertion_line(keyword: &str, assertion: &Assertion, request_type: RequestType) -> String {
    if is_status_code(&assertion.expression) {
        format!(
            "{} I validate that the Response Code should be {}",
            keyword, assertion.value
        )
    } else {
        format!(
            "{} I validate that the {} path \"{}\" should be \"{}\"",
            keyword,
            request_type.label(),
            assertion.expression,
            assertion.value
        )
    }
}

/// Render one scenario block
pub fn render_scenario(
    case: &TestCase,
    input: &InputEntry,
    output: &OutputEntry,
    config: &SpecflowConfig,
) -> SpecflowResult<String> {
    let url = case.parameters.require(ParameterMap::URL)?;
    let header = case.parameters.require(ParameterMap::REQUEST_HEADER)?;
    let label = case.request_type.label();

    let mut lines: Vec<String> = Vec::new();
    if let Some(tag) = scenario_tag(&case.name, config) {
        lines.push(tag.to_string());
    }
    lines.push(format!("Scenario: {}", input.name));
    lines.push("Given I am a XMLWebservice client".to_string());
    lines.push(format!(
        "When I send a {} request to URL \"{}\" with the following {} body",
        HTTP_VERB, url, label
    ));
    lines.push(input.body.clone());
    lines.push(format!("And I set the request header to \"{}\"", header));

    for (index, assertion) in output.assertions.iter().enumerate() {
        let keyword = if index == 0 { "Then" } else { "And" };
        lines.push(assertion_line(keyword, assertion, case.request_type));
    }

    Ok(lines.join("\n"))
}

/// Render every scenario of a case, in column order
pub fn render_scenarios(case: &TestCase, config: &SpecflowConfig) -> SpecflowResult<Vec<String>> {
    case.scenarios
        .iter()
        .map(|(input, output)| render_scenario(case, input, output, config))
        .collect()
}

/// Full feature-file text for a case
pub fn render_feature(case: &TestCase, config: &SpecflowConfig) -> SpecflowResult<String> {
    let scenarios = render_scenarios(case, config)?;
    let mut text = String::new();
    if let Some(title) = &config.feature_title {
        text.push_str(&format!("Feature: {}\n\n", title));
    }
    text.push_str(&scenarios.join("\n\n"));
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PairingPolicy;
    use crate::error::SpecflowError;
    use crate::types::ScenarioPairs;
    use pretty_assertions::assert_eq;

    fn case(name: &str, request_type: RequestType, assertions: Vec<Assertion>) -> TestCase {
        let parameters: ParameterMap = [
            ("RequestSheet", "Req"),
            ("ValidationSheet", "Val"),
            ("URL", "/api/login"),
            ("RequestHeader", "application/json"),
        ]
        .into_iter()
        .collect();
        let input = InputEntry {
            name: "Login_OK".to_string(),
            body: "\"\"\"\n{\nuser: bob\n}\n\"\"\"".to_string(),
        };
        let output = OutputEntry {
            name: "Login_OK".to_string(),
            assertions,
        };
        TestCase {
            name: name.to_string(),
            request_type,
            parameters,
            scenarios: ScenarioPairs::pair(vec![input], vec![output], PairingPolicy::Strict)
                .unwrap(),
        }
    }

    #[test]
    fn test_render_full_scenario() {
        let case = case(
            "Login_1",
            RequestType::Json,
            vec![
                Assertion::new("Response Code", "200"),
                Assertion::new("$.token", "abc"),
            ],
        );

        let rendered = render_scenarios(&case, &SpecflowConfig::default()).unwrap();
        assert_eq!(
            rendered,
            vec![[
                "Scenario: Login_OK",
                "Given I am a XMLWebservice client",
                "When I send a POST request to URL \"/api/login\" with the following json body",
                "\"\"\"",
                "{",
                "user: bob",
                "}",
                "\"\"\"",
                "And I set the request header to \"application/json\"",
                "Then I validate that the Response Code should be 200",
                "And I validate that the json path \"$.token\" should be \"abc\"",
            ]
            .join("\n")]
        );
    }

    #[test]
    fn test_tag_from_case_prefix() {
        let config = SpecflowConfig::default();
        assert_eq!(scenario_tag("S_Login_1", &config), Some(SMOKE_TAG));
        assert_eq!(scenario_tag("R_Login_1", &config), Some(REGRESSION_TAG));
        assert_eq!(scenario_tag("Login_1", &config), None);
        assert_eq!(scenario_tag("s_Login_1", &config), None);

        let smoke = case("S_Login_1", RequestType::Json, vec![]);
        let rendered = render_scenarios(&smoke, &config).unwrap();
        assert!(rendered[0].starts_with("@SmokeTest\nScenario: Login_OK"));

        let plain = case("Login_1", RequestType::Json, vec![]);
        let rendered = render_scenarios(&plain, &config).unwrap();
        assert!(rendered[0].starts_with("Scenario: Login_OK"));
    }

    #[test]
    fn test_status_code_matching() {
        assert!(is_status_code("Response Code"));
        assert!(is_status_code("  response   code"));
        assert!(is_status_code("RESPONSECODE"));
        assert!(is_status_code("Response Code (HTTP)"));
        assert!(!is_status_code("$.response.code.value"));
        assert!(!is_status_code("Code"));
    }

    #[test]
    fn test_status_code_wins_for_xml() {
        let case = case(
            "Login_1",
            RequestType::Xml,
            vec![
                Assertion::new("response code", "500"),
                Assertion::new("//Fault/Code", "E1"),
            ],
        );

        let rendered = render_scenarios(&case, &SpecflowConfig::default()).unwrap();
        assert!(rendered[0].contains("\nThen I validate that the Response Code should be 500\n"));
        assert!(rendered[0].ends_with("And I validate that the xml path \"//Fault/Code\" should be \"E1\""));
        assert!(rendered[0].contains("with the following xml body"));
    }

    #[test]
    fn test_missing_url_fails_render() {
        let mut case = case("Login_1", RequestType::Json, vec![]);
        case.parameters = [("RequestHeader", "h")].into_iter().collect();

        let result = render_scenarios(&case, &SpecflowConfig::default());
        assert!(matches!(result, Err(SpecflowError::Content(_))));
    }

    #[test]
    fn test_feature_header_and_trailing_newline() {
        let case = case("Login_1", RequestType::Json, vec![]);
        let config = SpecflowConfig {
            feature_title: Some("SpectrumAPI".to_string()),
            ..SpecflowConfig::default()
        };

        let text = render_feature(&case, &config).unwrap();
        assert!(text.starts_with("Feature: SpectrumAPI\n\nScenario: Login_OK\n"));
        assert!(text.ends_with("\"application/json\"\n"));

        let bare = render_feature(&case, &SpecflowConfig::default()).unwrap();
        assert!(bare.starts_with("Scenario: Login_OK"));
    }
}
