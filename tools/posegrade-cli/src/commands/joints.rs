//! Print the canonical joint table.

use posegrade_common::PosegradeError;
use posegrade_pose_model::Joint;
use serde::Serialize;

#[derive(Serialize)]
struct JointEntry {
    index: usize,
    name: &'static str,
}

pub fn run(json: bool) -> anyhow::Result<()> {
    let entries: Vec<JointEntry> = Joint::ALL
        .iter()
        .map(|joint| JointEntry {
            index: joint.index(),
            name: joint.name(),
        })
        .collect();

    if json {
        let json = serde_json::to_string_pretty(&entries).map_err(PosegradeError::from)?;
        println!("{json}");
    } else {
        for entry in &entries {
            println!("{:>2}  {}", entry.index, entry.name);
        }
    }

    Ok(())
}
