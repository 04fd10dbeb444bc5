#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # dbgen

 Generates tables of realistic test data from short attribute specifiers.

 Every column is described by a name and a specifier such as `name_full`,
 `int_1_100` or `date_01.01.1990_31.12.1999`: the first `_`-separated token
 names an attribute family, the rest are its parameters. A run assigns one
 gender per row, generates each column in order, blanks a share of its
 values if asked to, and transposes the columns into rows. A run either
 produces the whole table or fails with an error naming the column.

 ## Core Concepts

- **GenerationConfig:** column names, specifiers, row count, locale and blank
  percentages, read from JSON or assembled with a builder.
- **Family / ColumnStrategy:** each attribute family is served by a strategy
  registered in a `StrategyRegistry`.
- **Provider:** the source of locale-aware values (names, addresses, phone
  numbers, identifiers). `FakeProvider` is built on the `fake` crate.
- **GenerationJob:** runs a configuration and optionally hands the rows to an
  `ItemWriter`.

 ## Features

| **Feature**   | **Description**                                               |
|---------------|---------------------------------------------------------------|
| fake          | Enables `FakeProvider`, backed by the `fake` crate            |
| csv           | Enables the CSV `ItemWriter`                                  |
| json          | Enables the JSON `ItemWriter`                                 |
| logger        | Enables a logger `ItemWriter`, useful for debugging purposes  |
| cli           | Builds the `dbgen` binary                                     |
| full          | Enables all library features                                  |

 ## Getting Started

```toml
[dependencies]
dbgen-rs = { version = "<version>", features = ["<full|fake|csv|json|logger>"] }
```

```rust
# #[cfg(feature = "fake")]
# {
use dbgen::{
    core::{
        config::GenerationConfigBuilder,
        job::{GenerationJobBuilder, Job},
    },
    provider::fake::FakeProvider,
};

let config = GenerationConfigBuilder::new()
    .column("name", "name_full")
    .column("gender", "gender")
    .column("phone", "phone_7_r")
    .column("salary", "int_1000_9000")
    .row_count(20)
    .locale("ru")
    .blank_percentages(vec![0, 0, 10, 50])
    .build();

let provider = FakeProvider::new();
let job = GenerationJobBuilder::new()
    .config(config)
    .provider(&provider)
    .build()
    .unwrap();

let table = job.run().unwrap().table;
assert_eq!(table.row_count(), 20);
assert_eq!(table.column("salary").unwrap().iter().filter(|v| v.is_none()).count(), 10);
# }
```
 */

/// Configuration, specifiers, families and the generation job
pub mod core;

/// Error types
pub mod error;

#[doc(inline)]
pub use error::*;

/// Tabular writers (for example: CSV and JSON)
pub mod item;

pub mod provider;

/// Column strategies of the attribute families
pub mod strategy;
