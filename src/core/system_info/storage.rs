use std::collections::HashMap;

use crate::core::sysfs::{format_sectors_gb, SysRoot, NOT_AVAILABLE};
use crate::core::system_info::types::{DriveInfo, LuksVolume, PartitionInfo};

const SYS_BLOCK: &str = "/sys/block";
const PROC_MOUNTS: &str = "/proc/mounts";
const DEV_MAPPER: &str = "/dev/mapper";

const DRIVE_PREFIXES: &[&str] = &["sd", "nvme"];

/// Enumerate SATA/SCSI and NVMe drives with their partition trees.
pub fn collect(root: &SysRoot) -> Vec<DriveInfo> {
    let mounts = read_mounts(root);
    let mapper = mapper_names(root);

    list_drives(root)
        .into_iter()
        .map(|name| collect_drive(root, &name, &mounts, &mapper))
        .collect()
}

pub fn list_drives(root: &SysRoot) -> Vec<String> {
    root.list_dir(SYS_BLOCK)
        .into_iter()
        .filter(|name| DRIVE_PREFIXES.iter().any(|prefix| name.starts_with(prefix)))
        .collect()
}

pub fn drive_model(root: &SysRoot, dev: &str) -> String {
    root.read_trimmed(format!("{}/{}/device/model", SYS_BLOCK, dev))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn collect_drive(
    root: &SysRoot,
    dev: &str,
    mounts: &[MountEntry],
    mapper: &HashMap<String, String>,
) -> DriveInfo {
    let device_dir = format!("{}/{}", SYS_BLOCK, dev);

    let partitions = root
        .list_dir(&device_dir)
        .into_iter()
        .filter(|name| name.starts_with(dev))
        .map(|part| {
            let part_dir = format!("{}/{}", device_dir, part);
            let luks = holder_volume(root, &part_dir, mapper).map(|(dm, name)| LuksVolume {
                mount_point: find_mount(mounts, &name)
                    .or_else(|| find_mount(mounts, &dm))
                    .map(str::to_string),
                name,
            });

            PartitionInfo {
                size: root
                    .read_u64(format!("{}/size", part_dir))
                    .map(format_sectors_gb),
                mount_point: find_mount(mounts, &part).map(str::to_string),
                luks,
                name: part,
            }
        })
        .collect();

    DriveInfo {
        name: dev.to_string(),
        model: drive_model(root, dev),
        size: root
            .read_u64(format!("{}/size", device_dir))
            .map(format_sectors_gb),
        partitions,
    }
}

/// First device-mapper holder of a partition as `(dm-N, mapper name)`.
fn holder_volume(
    root: &SysRoot,
    part_dir: &str,
    mapper: &HashMap<String, String>,
) -> Option<(String, String)> {
    let dm = root
        .list_dir(format!("{}/holders", part_dir))
        .into_iter()
        .find(|holder| holder.starts_with("dm-"))?;

    let name = mapper
        .get(&dm)
        .cloned()
        .or_else(|| root.read_non_empty(format!("{}/{}/dm/name", SYS_BLOCK, dm)))
        .unwrap_or_else(|| dm.clone());

    Some((dm, name))
}

/// `/dev/mapper/<name>` symlinks keyed by the `dm-N` node they point at.
fn mapper_names(root: &SysRoot) -> HashMap<String, String> {
    root.list_dir(DEV_MAPPER)
        .into_iter()
        .filter_map(|name| {
            let target = root.link_target_name(format!("{}/{}", DEV_MAPPER, name))?;
            Some((target, name))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MountEntry {
    device: String,
    mount_point: String,
}

fn read_mounts(root: &SysRoot) -> Vec<MountEntry> {
    root.read_to_string(PROC_MOUNTS)
        .map(|raw| parse_mounts(&raw))
        .unwrap_or_default()
}

fn parse_mounts(raw: &str) -> Vec<MountEntry> {
    raw.lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let device = fields.next()?;
            let mount_point = fields.next()?;
            Some(MountEntry {
                device: device.to_string(),
                mount_point: unescape_mount_field(mount_point),
            })
        })
        .collect()
}

/// Mount point of the first entry whose device node is `name`.
fn find_mount<'a>(mounts: &'a [MountEntry], name: &str) -> Option<&'a str> {
    mounts
        .iter()
        .find(|entry| {
            entry.device == name
                || entry
                    .device
                    .rsplit_once('/')
                    .is_some_and(|(_, node)| node == name)
        })
        .map(|entry| entry.mount_point.as_str())
}

/// Undo the octal escapes the kernel applies to spaces, tabs, newlines and
/// backslashes in `/proc/mounts`.
fn unescape_mount_field(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut rest = field;
    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let escape = rest.get(pos + 1..pos + 4);
        match escape.and_then(|digits| u8::from_str_radix(digits, 8).ok()) {
            Some(byte) => {
                out.push(byte as char);
                rest = &rest[pos + 4..];
            }
            None => {
                out.push('\\');
                rest = &rest[pos + 1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Render a drive as tree rows: the drive, its partitions and any LUKS
/// volume opened on a partition.
pub fn partition_tree(drive: &DriveInfo) -> Vec<String> {
    let size_or_na = |size: &Option<String>| size.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let mut rows = vec![format!("{} ({})", drive.name, size_or_na(&drive.size))];
    for part in &drive.partitions {
        let row = format!(
            "├─{} ({}) {}",
            part.name,
            size_or_na(&part.size),
            part.mount_point.as_deref().unwrap_or("")
        );
        rows.push(row.trim_end().to_string());

        if let Some(luks) = &part.luks {
            let row = format!(
                "  └─{} (LUKS) {}",
                luks.name,
                luks.mount_point.as_deref().unwrap_or("")
            );
            rows.push(row.trim_end().to_string());
        }
    }
    rows
}
