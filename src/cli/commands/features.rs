//! List persisted columns.

use anyhow::Result;
use direction_data::DatasetRecord;

pub fn run() -> Result<()> {
    for (position, column) in DatasetRecord::header().iter().enumerate() {
        println!("{:>2}  {}", position + 1, column);
    }
    Ok(())
}
