//! Paging argument types for CLI commands

use clap::Args;
use clap::builder::RangedU64ValueParser;

use crate::query::PropertyRequest;

/// Shared paging arguments.
///
/// Flatten this into any command that builds a paged request:
/// ```ignore
/// Query {
///     #[command(flatten)]
///     paging: PageArgs,
/// }
/// ```
#[derive(Args, Debug, Default, Clone)]
pub struct PageArgs {
    /// Results per page (capped at 1000)
    #[arg(long, short = 'n', value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub page_size: Option<usize>,

    /// Offset of the first result
    #[arg(long, short = 'b')]
    pub begin: Option<usize>,
}

impl PageArgs {
    /// Effective page size: the flag, else the configured default
    pub fn resolve_page_size(&self, configured: usize) -> usize {
        self.page_size.unwrap_or(configured)
    }

    /// Apply paging to a property request
    pub fn apply(&self, request: PropertyRequest, configured: usize) -> PropertyRequest {
        let request = request.page_size(self.resolve_page_size(configured));
        match self.begin {
            Some(begin) => request.begin(begin),
            None => request,
        }
    }
}
