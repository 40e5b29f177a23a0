//! KPI endpoint URL construction

pub const ADJUST_URL_BASE: &str = "https://api.adjust.com/kpis/v1";

pub const KPIS: &str = "daus,waus,maus,installs";
pub const START_DATE: &str = "2000-01-01";
pub const END_DATE: &str = "2030-01-01";
pub const GROUPING: &str = "day,os_names";
pub const OS_NAMES: &str = "android,ios";

/// Build the CSV KPI report URL for one app.
///
/// Values are inserted verbatim; app keys and tokens are URL-safe tokens.
pub fn build_kpi_url(app_key: &str, token: &str) -> String {
    format!(
        "{base}/{app_key}.csv?user_token={token}&kpis={KPIS}&start_date={START_DATE}\
         &end_date={END_DATE}&grouping={GROUPING}&os_names={OS_NAMES}",
        base = ADJUST_URL_BASE,
    )
}

/// Mask the `user_token` query value so URLs can be logged
pub fn redact_token(url: &str) -> String {
    const PARAM: &str = "user_token=";

    let Some(start) = url.find(PARAM).map(|i| i + PARAM.len()) else {
        return url.to_string();
    };
    let end = url[start..].find('&').map_or(url.len(), |i| start + i);

    format!("{}***{}", &url[..start], &url[end..])
}
