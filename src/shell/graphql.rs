use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::cases::use_cases::case_history::inbound::graphql::CaseHistoryQuery;
use crate::modules::cases::use_cases::create_case::inbound::graphql::CreateCaseMutation;
use crate::modules::cases::use_cases::list_cases::inbound::graphql::ListCasesQuery;
use crate::modules::cases::use_cases::transfer_case::inbound::graphql::TransferCaseMutation;
use crate::shell::http::Caller;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListCasesQuery, CaseHistoryQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(CreateCaseMutation, TransferCaseMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// Each request carries its own caller.
pub async fn graphql_handler(
    Extension(schema): Extension<AppSchema>,
    Caller(session): Caller,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner().data(session)).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
