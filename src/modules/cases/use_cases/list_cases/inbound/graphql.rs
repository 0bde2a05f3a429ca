use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::cases::core::case::Case;
use crate::modules::cases::core::session::Session;
use crate::modules::cases::core::state::CaseState;
use crate::modules::cases::use_cases::list_cases::handler::ListCases;
use crate::modules::cases::use_cases::list_cases::queries_port::CasePage;
use crate::modules::cases::use_cases::track_time_in_area::report::CurrentDwell;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlCase {
    pub code: String,
    pub barcode: String,
    pub title: String,
    pub external_ref: Option<String>,
    pub sender_name: String,
    pub current_area: String,
    pub final_area: String,
    pub state: String,
    pub attachment_url: Option<String>,
    pub process_template: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
    pub version: i64,
}

impl From<Case> for GqlCase {
    fn from(c: Case) -> Self {
        Self {
            barcode: c.code.barcode(),
            code: c.code.to_string(),
            title: c.title,
            external_ref: c.external_ref,
            sender_name: c.sender_name,
            current_area: c.current_area,
            final_area: c.final_area,
            state: c.state.to_string(),
            attachment_url: c.attachment.map(|a| a.url),
            process_template: c.process_template,
            created_at: c.created_at,
            updated_at: c.updated_at,
            version: c.version,
        }
    }
}

/// Open stay of a listed case, graded against its process template.
#[derive(SimpleObject, Clone)]
pub struct GqlCurrentStay {
    pub case_code: String,
    pub area: String,
    pub entered_at: i64,
    pub elapsed_days: f64,
    pub max_days: Option<u32>,
    pub percent_elapsed: Option<f64>,
    pub level: String,
}

impl GqlCurrentStay {
    fn new(case_code: String, stay: CurrentDwell) -> Self {
        Self {
            case_code,
            area: stay.area,
            entered_at: stay.entered_at,
            elapsed_days: stay.elapsed_days,
            max_days: stay.max_days,
            percent_elapsed: stay.percent_elapsed,
            level: stay.level.to_string(),
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlCasePage {
    pub items: Vec<GqlCase>,
    pub total: i64,
    /// Only cases that currently sit in a tracked interval.
    pub current_stays: Vec<GqlCurrentStay>,
}

impl From<CasePage> for GqlCasePage {
    fn from(page: CasePage) -> Self {
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            total: page.total as i64,
            current_stays: Vec::new(),
        }
    }
}

#[derive(Default)]
pub struct ListCasesQuery;

#[Object]
impl ListCasesQuery {
    #[allow(clippy::too_many_arguments)]
    async fn cases(
        &self,
        context: &Context<'_>,
        state: Option<String>,
        area: Option<String>,
        search: Option<String>,
        hide_completed: Option<bool>,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> GqlResult<GqlCasePage> {
        let app = context.data_unchecked::<AppState>();
        let session = context.data::<Session>()?;
        let request = ListCases {
            state: state.map(|s| s.parse::<CaseState>()).transpose()?,
            area,
            search,
            hide_completed: hide_completed.unwrap_or(false),
            offset: offset.map(|o| o.max(0) as u64),
            limit: limit.map(|l| l.max(0) as u64),
        };
        let page = app.list_handler.handle(session, request).await?;
        let codes: Vec<_> = page.items.iter().map(|c| c.code.clone()).collect();
        let mut stays = app.dwell_handler.current_stays(&codes).await?;

        let mut result = GqlCasePage::from(page);
        result.current_stays = codes
            .into_iter()
            .filter_map(|code| {
                let stay = stays.remove(&code).flatten()?;
                Some(GqlCurrentStay::new(code.to_string(), stay))
            })
            .collect();
        Ok(result)
    }
}
