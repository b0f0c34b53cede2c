use std::fs;

use super::*;

const FIXTURE: &str = r#"// !$*UTF8*$!
{
	archiveVersion = 1;
	objectVersion = 56;
	objects = {

/* Begin PBXBuildFile section */
/* End PBXBuildFile section */

/* Begin PBXFileReference section */
/* End PBXFileReference section */

/* Begin PBXGroup section */
		A1B2C3D4E5F60718293A4B5C /* App */ = {
			isa = PBXGroup;
			children = (
				B2C3D4E5F60718293A4B5C6D /* Stores */,
			);
			path = App;
			sourceTree = "<group>";
		};
		B2C3D4E5F60718293A4B5C6D /* Stores */ = {
			isa = PBXGroup;
			children = (
			);
			path = Stores;
			sourceTree = "<group>";
		};
/* End PBXGroup section */

/* Begin PBXSourcesBuildPhase section */
		E1F20718293A4B5C6D7E8F90 /* Sources */ = {
			isa = PBXSourcesBuildPhase;
			buildActionMask = 2147483647;
			files = (
			);
			runOnlyForDeploymentPostprocessing = 0;
		};
/* End PBXSourcesBuildPhase section */

	};
	rootObject = F00718293A4B5C6D7E8F9012 /* Project object */;
}
"#;

fn args(project: PathBuf, additions: &[&str]) -> Args {
	Args {
		project,
		additions: additions.iter().map(|raw| (*raw).to_owned()).collect(),
		plan: None,
		root_group: "App".to_owned(),
		layout: None,
		verbose: false,
	}
}

#[test]
fn splits_group_and_file() {
	let add = parse_pair("Views/SignInView.swift").unwrap();
	assert_eq!(add.group, "Views");
	assert_eq!(add.logical_path, "SignInView.swift");
}

#[test]
fn file_part_keeps_nested_slashes() {
	let add = parse_pair("Views/Auth/SignInView.swift").unwrap();
	assert_eq!(add.group, "Views");
	assert_eq!(add.logical_path, "Auth/SignInView.swift");
}

#[test]
fn rejects_malformed_pairs() {
	for raw in ["SignInView.swift", "/SignInView.swift", "Views/", ""] {
		assert!(parse_pair(raw).is_err(), "accepted {raw:?}");
	}
}

#[test]
fn plan_files_deserialize() {
	let plan: Vec<Addition> =
		serde_json::from_str(r#"[{"file": "TaskStore.swift", "group": "Stores"}]"#).unwrap();
	assert_eq!(plan, vec![Addition::new("TaskStore.swift", "Stores")]);
}

#[test]
fn run_rewrites_the_project_in_place() {
	let dir = tempfile::tempdir().unwrap();
	let project = dir.path().join("project.pbxproj");
	fs::write(&project, FIXTURE).unwrap();

	run(&args(project.clone(), &["Stores/TaskStore.swift"])).unwrap();

	let rewritten = fs::read_to_string(&project).unwrap();
	assert!(rewritten.contains("path = TaskStore.swift;"));
	assert!(rewritten.contains("/* TaskStore.swift in Sources */"));
}

#[test]
fn failed_batches_leave_the_file_alone() {
	let broken = FIXTURE.replace("/* End PBXFileReference section */\n", "");
	let dir = tempfile::tempdir().unwrap();
	let project = dir.path().join("project.pbxproj");
	fs::write(&project, &broken).unwrap();

	let err = run(&args(project.clone(), &["Stores/TaskStore.swift"])).unwrap_err();
	assert!(err.to_string().contains("malformed manifest"), "got {err}");
	assert_eq!(fs::read_to_string(&project).unwrap(), broken);
}

#[test]
fn empty_batches_are_rejected() {
	let err = run(&args(PathBuf::from("unused.pbxproj"), &[])).unwrap_err();
	assert!(err.to_string().contains("no additions"), "got {err}");
}
