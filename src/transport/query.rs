use crate::domain::{ApiKey, GetCode, GetNumber, Phone, ReleaseNumber, TaskId};

pub fn encode_get_code_query(request: &GetCode) -> Vec<(String, String)> {
    vec![(TaskId::FIELD.to_owned(), request.task_id().to_string())]
}

pub fn encode_release_number_query(request: &ReleaseNumber) -> Vec<(String, String)> {
    vec![(Phone::FIELD.to_owned(), request.phone().as_str().to_owned())]
}

pub fn encode_get_number_query(request: &GetNumber) -> Vec<(String, String)> {
    vec![
        (
            GetNumber::CHANNEL_FIELD.to_owned(),
            request.channel().as_str().to_owned(),
        ),
        (
            GetNumber::COUNTRY_FIELD.to_owned(),
            request.country().as_str().to_owned(),
        ),
        (
            GetNumber::PID_FIELD.to_owned(),
            request.pid().as_str().to_owned(),
        ),
    ]
}

/// Set `secret_key` to the client's key, dropping any value already present.
pub fn apply_secret_key(params: &mut Vec<(String, String)>, api_key: &ApiKey) {
    params.retain(|(key, _)| key != ApiKey::FIELD);
    params.push((ApiKey::FIELD.to_owned(), api_key.as_str().to_owned()));
}

#[cfg(test)]
mod tests {
    use crate::domain::Selector;

    use super::*;

    #[test]
    fn encode_get_code_query_params() {
        let params = encode_get_code_query(&GetCode::new(42));
        assert_eq!(params, vec![("taskid".to_owned(), "42".to_owned())]);
    }

    #[test]
    fn encode_release_number_query_passes_phone_through() {
        let params = encode_release_number_query(&ReleaseNumber::new(" +7 925 "));
        assert_eq!(params, vec![("phone".to_owned(), " +7 925 ".to_owned())]);
    }

    #[test]
    fn encode_get_number_query_params() {
        let request = GetNumber::new(Selector::any(), "any", "p1");
        let params = encode_get_number_query(&request);
        assert_eq!(
            params,
            vec![
                ("channel".to_owned(), "any".to_owned()),
                ("country".to_owned(), "any".to_owned()),
                ("pid".to_owned(), "p1".to_owned()),
            ]
        );
    }

    #[test]
    fn apply_secret_key_appends_key() {
        let mut params = encode_get_code_query(&GetCode::new(42));
        apply_secret_key(&mut params, &ApiKey::new("ABC123"));
        assert_eq!(
            params,
            vec![
                ("taskid".to_owned(), "42".to_owned()),
                ("secret_key".to_owned(), "ABC123".to_owned()),
            ]
        );
    }

    #[test]
    fn apply_secret_key_overrides_existing_values() {
        let mut params = vec![
            ("secret_key".to_owned(), "forged".to_owned()),
            ("pid".to_owned(), "p1".to_owned()),
            ("secret_key".to_owned(), "another".to_owned()),
        ];
        apply_secret_key(&mut params, &ApiKey::new("ABC123"));

        let keys = params
            .iter()
            .filter(|(key, _)| key == "secret_key")
            .map(|(_, value)| value.as_str())
            .collect::<Vec<_>>();
        assert_eq!(keys, vec!["ABC123"]);
        assert!(params.contains(&("pid".to_owned(), "p1".to_owned())));
    }
}
