//! # Builder Module Unit Tests / Builder 模块单元测试
//!
//! Tests for the command builders: shape of the sequences, interpolation of
//! the inputs and the unsupported build path.
//!
//! 命令构建器的测试：序列结构、输入插值以及不受支持的构建路径。

mod common;

use common::{components, platform};
use metal_ci_commands::builder::{
    build_base_commands, build_non_standalone_commands, build_standalone_build_commands,
    build_standalone_commands, select_extra_test_runner_flag, COMPILATION_ERRORS_AS_WARNINGS,
};
use metal_ci_commands::config::PipelineConfig;
use metal_ci_commands::core::CommandError;

#[cfg(test)]
mod base_commands_tests {
    use super::*;

    #[test]
    fn test_base_commands_has_five_entries() {
        let config = PipelineConfig::default();
        let commands = build_base_commands(&config, "MyProj", &components(&["il2cpp", "mono"]));

        assert_eq!(commands.len(), 5);
        assert!(commands.as_slice()[0].contains("MyProj"));
        assert!(commands.as_slice()[4].contains("-c il2cpp -c mono "));
    }

    #[test]
    fn test_base_commands_exact_text() {
        let config = PipelineConfig::default();
        let commands = build_base_commands(&config, "MyProj", &components(&["il2cpp", "mono"]));
        let commands = commands.as_slice();

        assert_eq!(
            commands[0],
            "curl -s https://artifactory.prd.cds.internal.unity3d.com/artifactory/unity-tools-local/utr-standalone/utr --output TestProjects/MyProj/utr && chmod +x TestProjects/MyProj/utr"
        );
        assert_eq!(
            commands[1],
            "ssh -i ~/.ssh/id_rsa_macmini -o \"StrictHostKeyChecking=no\" bokken@$BOKKEN_DEVICE_IP \"bash -lc 'pip3 install --user unity-downloader-cli --index-url https://artifactory.prd.it.unity3d.com/artifactory/api/pypi/pypi/simple --upgrade'\""
        );
        assert_eq!(
            commands[2],
            "scp -i ~/.ssh/id_rsa_macmini -o \"StrictHostKeyChecking=no\" -r $YAMATO_SOURCE_DIR bokken@$BOKKEN_DEVICE_IP:~/Graphics"
        );
        assert_eq!(
            commands[3],
            "scp -i ~/.ssh/id_rsa_macmini -o \"StrictHostKeyChecking=no\" ~/.ssh/id_rsa_macmini bokken@$BOKKEN_DEVICE_IP:~/.ssh/id_rsa_macmini"
        );
        assert_eq!(
            commands[4],
            "ssh -i ~/.ssh/id_rsa_macmini -o \"StrictHostKeyChecking=no\" bokken@$BOKKEN_DEVICE_IP '/Users/bokken/Library/Python/3.7/bin/unity-downloader-cli --source-file ~/Graphics/unity_revision.txt -c il2cpp -c mono  --wait --published-only'"
        );
    }

    #[test]
    fn test_component_flags_keep_order() {
        let config = PipelineConfig::default();
        let commands =
            build_base_commands(&config, "P", &components(&["mono", "editor", "il2cpp"]));
        let fetch = &commands.as_slice()[4];

        let mono = fetch.find("-c mono ").unwrap();
        let editor = fetch.find("-c editor ").unwrap();
        let il2cpp = fetch.find("-c il2cpp ").unwrap();
        assert!(mono < editor && editor < il2cpp);
    }

    #[test]
    fn test_no_components_still_five_commands() {
        let config = PipelineConfig::default();
        let commands = build_base_commands(&config, "P", &[]);

        assert_eq!(commands.len(), 5);
        assert!(!commands.as_slice()[4].contains("-c "));
    }

    #[test]
    fn test_inputs_are_not_escaped() {
        let config = PipelineConfig::default();
        let commands = build_base_commands(&config, "a b;c", &components(&["x$y"]));

        assert!(commands.as_slice()[0].contains("TestProjects/a b;c/utr"));
        assert!(commands.as_slice()[4].contains("-c x$y "));
    }

    #[test]
    fn test_custom_config_is_used() {
        let config = PipelineConfig {
            repository_name: "Repo".to_string(),
            test_projects_dir: "Projects".to_string(),
            remote_user: "ci".to_string(),
            device_ip_var: "DEVICE".to_string(),
            ..PipelineConfig::default()
        };
        let commands = build_base_commands(&config, "P", &[]);

        assert!(commands.as_slice()[0].contains("Projects/P/utr"));
        assert!(commands.as_slice()[2].ends_with("ci@$DEVICE:~/Repo"));
    }
}

#[cfg(test)]
mod test_run_commands_tests {
    use super::*;

    #[test]
    fn test_non_standalone_has_six_entries() {
        let config = PipelineConfig::default();
        let commands = build_non_standalone_commands(
            &config,
            "MyProj",
            &platform(&["editor"]),
            "metal",
            "--suite=editor",
        );

        assert_eq!(commands.len(), 6);
        let last = commands.last().unwrap();
        assert!(last.contains("exit $UTR_RESULT"));
        assert!(!last.contains("--timeout="));
        assert!(!last.contains(COMPILATION_ERRORS_AS_WARNINGS));
    }

    #[test]
    fn test_non_standalone_block_text() {
        let config = PipelineConfig::default();
        let commands = build_non_standalone_commands(
            &config,
            "MyProj",
            &platform(&["editor"]),
            "metal",
            "--suite=editor",
        );
        let lines: Vec<&str> = commands.last().unwrap().lines().collect();

        assert_eq!(
            lines,
            vec![
                "ssh -i ~/.ssh/id_rsa_macmini -o \"StrictHostKeyChecking=no\" bokken@$BOKKEN_DEVICE_IP \"export UPM_REGISTRY=https://artifactory-slo.bf.unity3d.com/artifactory/api/npm/upm-candidates; echo \\$UPM_REGISTRY; cd ~/Graphics/TestProjects/MyProj && ~/Graphics/TestProjects/MyProj/utr --suite=editor --testproject=/Users/bokken/Graphics/TestProjects/MyProj --editor-location=/Users/bokken/.Editor --artifacts_path=/Users/bokken/Graphics/TestProjects/MyProj/test-results\"",
                "UTR_RESULT=$?",
                "mkdir -p TestProjects/MyProj/test-results/",
                "scp -i ~/.ssh/id_rsa_macmini -o \"StrictHostKeyChecking=no\" -r bokken@$BOKKEN_DEVICE_IP:/Users/bokken/Graphics/TestProjects/MyProj/test-results/ TestProjects/MyProj/test-results/",
                "exit $UTR_RESULT",
            ]
        );
    }

    #[test]
    fn test_standalone_has_timeout_and_suffix() {
        let config = PipelineConfig::default();
        let commands = build_standalone_commands(
            &config,
            "MyProj",
            &platform(&["editor"]),
            "metal",
            "--platform=Standalone",
        );

        assert_eq!(commands.len(), 6);
        let last = commands.last().unwrap();
        assert!(last.contains("--timeout=2400"));
        assert!(last.contains("utr --platform=StandaloneOSX  --testproject="));
        assert!(last.contains("exit $UTR_RESULT"));
    }

    #[test]
    fn test_extra_flag_follows_timeout() {
        let config = PipelineConfig::default();
        let commands = build_standalone_commands(
            &config,
            "UniversalHybridTest",
            &platform(&["editor"]),
            "metal",
            "--platform=Standalone",
        );

        assert!(commands
            .last()
            .unwrap()
            .contains("/test-results --timeout=2400 --compilation-errors-as-warnings\""));
    }

    #[test]
    fn test_non_standalone_extra_flag_for_hybrid_projects() {
        let config = PipelineConfig::default();
        let commands = build_non_standalone_commands(
            &config,
            "HDRP_HybridTests",
            &platform(&[]),
            "metal",
            "",
        );

        assert!(commands
            .last()
            .unwrap()
            .contains("/test-results --compilation-errors-as-warnings\""));
    }

    #[test]
    fn test_sequences_start_with_base_commands() {
        let config = PipelineConfig::default();
        let platform = platform(&["editor", "il2cpp"]);
        let base = build_base_commands(&config, "P", &platform.components);
        let full = build_non_standalone_commands(&config, "P", &platform, "metal", "");

        assert_eq!(&full.as_slice()[..5], base.as_slice());
    }

    #[test]
    fn test_builders_are_idempotent() {
        let config = PipelineConfig::default();
        let platform = platform(&["editor", "il2cpp"]);

        assert_eq!(
            build_standalone_commands(&config, "P", &platform, "metal", "--a"),
            build_standalone_commands(&config, "P", &platform, "metal", "--a")
        );
        assert_eq!(
            build_non_standalone_commands(&config, "P", &platform, "metal", "--a"),
            build_non_standalone_commands(&config, "P", &platform, "metal", "--a")
        );
    }

    #[test]
    fn test_api_does_not_change_commands() {
        let config = PipelineConfig::default();
        let platform = platform(&["editor"]);

        assert_eq!(
            build_non_standalone_commands(&config, "P", &platform, "metal", "--a"),
            build_non_standalone_commands(&config, "P", &platform, "opengl", "--a")
        );
    }
}

#[cfg(test)]
mod standalone_build_tests {
    use super::*;

    #[test]
    fn test_standalone_build_always_fails() {
        let config = PipelineConfig::default();
        for folder in ["P", "UniversalHybridTest", ""] {
            let result =
                build_standalone_build_commands(&config, folder, &platform(&["editor"]), "metal", "");
            assert!(matches!(
                result,
                Err(CommandError::UnsupportedConfiguration { .. })
            ));
        }
    }

    #[test]
    fn test_standalone_build_error_message() {
        let config = PipelineConfig::default();
        let err = build_standalone_build_commands(&config, "P", &platform(&[]), "metal", "")
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "osx_metal: standalone_split set to true but build commands not specified"
        );
    }
}

#[cfg(test)]
mod extra_flag_tests {
    use super::*;

    #[test]
    fn test_allow_listed_projects() {
        assert_eq!(
            select_extra_test_runner_flag("UniversalHybridTest"),
            "--compilation-errors-as-warnings"
        );
        assert_eq!(
            select_extra_test_runner_flag("hdrp_hybridtests"),
            "--compilation-errors-as-warnings"
        );
    }

    #[test]
    fn test_other_projects() {
        assert_eq!(select_extra_test_runner_flag("SomeOtherProject"), "");
        assert_eq!(select_extra_test_runner_flag("UniversalHybridTest "), "");
        assert_eq!(select_extra_test_runner_flag(""), "");
    }
}
