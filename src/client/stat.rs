//! Statistics reports (`stat.*`).
//!
//! Every report shares the delivery switch of [`StatResult`]: stored on the server, returned
//! in the body, or mailed to a list of recipients.

use super::{SendsayClient, SendsayError};
use crate::domain::{ApiResult, Payload, ResultFormat, StatActivity, StatIssue, StatResult, StatUni};

impl SendsayClient {
    /// Account activity, newest first.
    ///
    /// Filter keys land at the top level of the request and may override the paging and
    /// sorting defaults.
    pub async fn stat_activity(&self, request: StatActivity) -> Result<ApiResult, SendsayError> {
        let StatActivity {
            filter,
            result,
            format,
            page_size,
            page,
        } = request;
        self.execute(
            Payload::builder("stat.activity")
                .field("sort", "date")
                .field("desc", 1)
                .field("page", page)
                .field("pagesize", page_size)
                .merge(filter)
                .with(|b| result.apply(b, format))
                .build(),
        )
        .await
    }

    /// Issue statistics grouped by time bucket.
    pub async fn stat_issue(&self, request: StatIssue) -> Result<ApiResult, SendsayError> {
        let StatIssue {
            from,
            upto,
            groups,
            group_by,
            total,
            with_empty,
            result,
            format,
        } = request;
        self.execute(
            Payload::builder("stat.issue")
                .field("group", groups)
                .field("groupby", group_by)
                .field("total", total)
                .field("withempty", with_empty)
                .optional("issue.from", from)
                .optional("issue.upto", upto)
                .with(|b| result.apply(b, format))
                .build(),
        )
        .await
    }

    /// Universal statistics query over the account's data sources.
    pub async fn stat_uni(&self, request: StatUni) -> Result<ApiResult, SendsayError> {
        let StatUni {
            select,
            filter,
            order,
            result,
            format,
            skip,
            count,
        } = request;
        self.execute(
            Payload::builder("stat.uni")
                .field("skip", skip)
                .field("select", select)
                .field("order", order)
                .field("filter", filter)
                .optional("first", count)
                .with(|b| result.apply(b, format))
                .build(),
        )
        .await
    }

    /// Member counts of the given groups.
    pub async fn stat_group_common(
        &self,
        groups: Vec<String>,
        result: StatResult,
        format: ResultFormat,
    ) -> Result<ApiResult, SendsayError> {
        self.execute(
            Payload::builder("stat.group.common")
                .field("group", groups)
                .with(|b| result.apply(b, format))
                .build(),
        )
        .await
    }
}
