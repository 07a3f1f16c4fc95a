//! Static catalog of Chromium paths that must exist in the workspace as
//! links into the checkout.
//!
//! The base lists apply everywhere; the per-platform lists are unioned in
//! when the matching target OS is requested. Entries never change during a
//! run.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lower")]
pub enum TargetOs {
    Android,
    Mac,
    Linux,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn describe(self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Directory => "directory",
        }
    }
}

/// One path that should exist in the workspace as a link to the same
/// relative path inside the checkout.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub path: &'static str,
    pub kind: EntryKind,
}

/// The catalog for the requested target platforms: all file entries, then
/// the directory entries (base list extended per platform).
///
/// The per-platform lists repeat a few base entries (and each other), so
/// paths are deduplicated; planning the same path twice would make the
/// second link creation fail.
pub fn entries(target_os: &[TargetOs]) -> Vec<CatalogEntry> {
    let mut out: Vec<CatalogEntry> = FILES
        .iter()
        .map(|p| CatalogEntry {
            path: p,
            kind: EntryKind::File,
        })
        .collect();

    let mut dirs: Vec<&'static str> = DIRECTORIES.to_vec();
    if target_os.contains(&TargetOs::Android) {
        dirs.extend_from_slice(ANDROID_DIRECTORIES);
    }
    if target_os.contains(&TargetOs::Mac) {
        dirs.extend_from_slice(MAC_DIRECTORIES);
    }
    if target_os.contains(&TargetOs::Linux) {
        dirs.extend_from_slice(LINUX_DIRECTORIES);
    }

    let mut seen = std::collections::BTreeSet::new();
    out.extend(
        dirs.into_iter()
            .filter(|p| seen.insert(*p))
            .map(|p| CatalogEntry {
                path: p,
                kind: EntryKind::Directory,
            }),
    );
    out
}

/// Default target platforms when none are given on the command line.
pub fn host_target_os() -> Vec<TargetOs> {
    if cfg!(target_os = "macos") {
        vec![TargetOs::Mac]
    } else if cfg!(target_os = "linux") {
        vec![TargetOs::Linux]
    } else {
        Vec::new()
    }
}

pub const DIRECTORIES: &[&str] = &[
    "build",
    "buildtools",
    "google_apis",
    "base",
    "crypto",
    "chrome",
    "dbus",
    "gin",
    "sql",
    "net",
    "sdch",
    "v8",
    "ipc",
    "url",
    "testing",
    "third_party/binutils",
    "third_party/boringssl",
    "third_party/colorama",
    "third_party/drmemory",
    "third_party/expat",
    "third_party/gflags",
    "third_party/icu",
    "third_party/instrumented_libraries",
    "third_party/jemalloc",
    "third_party/jsoncpp",
    "third_party/libjpeg",
    "third_party/libjpeg_turbo",
    "third_party/libsrtp",
    "third_party/libudev",
    "third_party/libvpx",
    "third_party/libxml",
    "third_party/libyuv",
    "third_party/llvm-build",
    "third_party/modp_b64",
    "third_party/nss",
    "third_party/ocmock",
    "third_party/openmax_dl",
    "third_party/opus",
    "third_party/protobuf",
    "third_party/re2",
    "third_party/speex",
    "third_party/sqlite",
    "third_party/syzygy",
    "third_party/tcmalloc",
    "third_party/usrsctp",
    "third_party/yasm",
    "third_party/zlib",
    "tools/clang",
    "tools/generate_library_loader",
    "tools/gn",
    "tools/grit",
    "tools/gyp",
    "tools/memory",
    "tools/protoc_wrapper",
    "tools/python",
    "tools/swarming_client",
    "tools/valgrind",
    "tools/win",
    "third_party/libjingle/overrides/allocator_shim",
    "third_party/libjingle/source",
    "jingle/glue",
    "jingle/notifier",
    "third_party/webrtc/base",
    "third_party/webrtc/build/android",
    "third_party/webrtc/common_audio",
    "third_party/webrtc/common_video",
    "third_party/webrtc/examples",
    "third_party/webrtc/libjingle",
    "third_party/webrtc/modules/audio_coding/codecs/cng",
    "third_party/webrtc/modules/audio_coding/codecs/g711",
    "third_party/webrtc/modules/audio_coding/codecs/g722",
    "third_party/webrtc/modules/audio_coding/codecs/ilbc",
    "third_party/webrtc/modules/audio_coding/codecs/isac",
    "third_party/webrtc/modules/audio_coding/codecs/mock",
    "third_party/webrtc/modules/audio_coding/codecs/opus",
    "third_party/webrtc/modules/audio_coding/codecs/pcm16b",
    "third_party/webrtc/modules/audio_coding/codecs/red",
    "third_party/webrtc/modules/audio_coding/codecs/tools",
    "third_party/webrtc/modules/audio_coding/neteq/interface",
    "third_party/webrtc/modules/audio_coding/neteq/mock",
    "third_party/webrtc/modules/audio_coding/neteq/test",
    "third_party/webrtc/modules/audio_coding/neteq/tools",
    "third_party/webrtc/modules/audio_coding/main/interface",
    "third_party/webrtc/modules/audio_coding/main/test",
    "third_party/webrtc/modules/audio_conference_mixer",
    "third_party/webrtc/modules/audio_device",
    "third_party/webrtc/modules/audio_processing",
    "third_party/webrtc/modules/bitrate_controller",
    "third_party/webrtc/modules/desktop_capture",
    "third_party/webrtc/modules/interface",
    "third_party/webrtc/modules/media_file",
    "third_party/webrtc/modules/pacing",
    "third_party/webrtc/modules/remote_bitrate_estimator",
    "third_party/webrtc/modules/rtp_rtcp",
    "third_party/webrtc/modules/utility",
    "third_party/webrtc/modules/video_capture",
    "third_party/webrtc/modules/video_coding",
    "third_party/webrtc/modules/video_processing",
    "third_party/webrtc/modules/video_render",
    "third_party/webrtc/overrides/webrtc/base",
    "third_party/webrtc/p2p/base",
    "third_party/webrtc/p2p/client",
    "third_party/webrtc/sound",
    "third_party/webrtc/system_wrappers",
    "third_party/webrtc/test",
    "third_party/webrtc/tools",
    "third_party/webrtc/video",
    "third_party/webrtc/video_engine",
    "third_party/webrtc/voice_engine",
];

pub const ANDROID_DIRECTORIES: &[&str] = &[
    "third_party/android_testrunner",
    "third_party/android_tools",
    "third_party/appurify-python",
    "third_party/ashmem",
    "third_party/jsr-305",
    "third_party/libevent",
    "third_party/requests",
    "tools/android",
    "tools/relocation_packer",
];

pub const MAC_DIRECTORIES: &[&str] = &[
    "third_party/mach_override",
    "third_party/apple_apsl",
];

pub const LINUX_DIRECTORIES: &[&str] = &[
    "third_party/gold",
    "third_party/libevent",
    "tools/xdisplaycheck",
    "tools/generate_library_loader",
];

pub const FILES: &[&str] = &[
    ".gn",
    "tools/find_depot_tools.py",
    "third_party/BUILD.gn",
    "third_party/libjingle/overrides/init_webrtc.h",
    "third_party/libjingle/overrides/init_webrtc.cc",
    "third_party/libjingle/overrides/initialize_module.cc",
    "third_party/libjingle/overrides/talk/media/webrtc/webrtcexport.h",
    "third_party/libjingle/BUILD.gn",
    "third_party/libjingle/libjingle_common.gypi",
    "third_party/libjingle/libjingle_nacl.gyp",
    "third_party/libjingle/OWNERS",
    "third_party/libjingle/README.chromium",
    "jingle/BUILD.gn",
    "jingle/DEPS",
    "jingle/OWNERS",
    "jingle/jingle.gypi",
    "jingle/jingle_nacl.gyp",
    "third_party/webrtc/build/adb_shell.sh",
    "third_party/webrtc/build/apk_tests.gyp",
    "third_party/webrtc/build/apk_tests_noop.gyp",
    "third_party/webrtc/build/arm_neon.gypi",
    "third_party/webrtc/build/download_vs_toolchain.py",
    "third_party/webrtc/build/extra_gitignore.py",
    "third_party/webrtc/build/find_directx_sdk.py",
    "third_party/webrtc/build/gyp_webrtc",
    "third_party/webrtc/build/gyp_webrtc.py",
    "third_party/webrtc/build/isolate.gypi",
    "third_party/webrtc/build/merge_libs.gyp",
    "third_party/webrtc/build/merge_libs.py",
    "third_party/webrtc/build/merge_libs_voice.gyp",
    "third_party/webrtc/build/merge_voice_libs.gyp",
    "third_party/webrtc/build/no_op.cc",
    "third_party/webrtc/build/OWNERS",
    "third_party/webrtc/build/protoc.gypi",
    "third_party/webrtc/build/tsan_suppressions_webrtc.cc",
    "third_party/webrtc/build/version.py",
    "third_party/webrtc/build/webrtc.gni",
    "third_party/webrtc/modules/audio_coding/BUILD.gn",
    "third_party/webrtc/modules/audio_coding/OWNERS",
    "third_party/webrtc/modules/audio_coding/codecs/audio_decoder.cc",
    "third_party/webrtc/modules/audio_coding/codecs/audio_decoder.h",
    "third_party/webrtc/modules/audio_coding/codecs/audio_encoder.cc",
    "third_party/webrtc/modules/audio_coding/codecs/audio_encoder.h",
    "third_party/webrtc/modules/audio_coding/codecs/interfaces.gypi",
    "third_party/webrtc/modules/audio_coding/codecs/OWNERS",
    "third_party/webrtc/modules/audio_coding/main/OWNERS",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_amr.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_amr.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_amrwb.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_amrwb.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_cng.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_cng.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_codec_database.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_codec_database.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_common_defs.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_dtmf_playout.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_dtmf_playout.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_g7221.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_g7221c.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_g7221c.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_g7221.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_g722.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_g722.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_g7291.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_g7291.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_generic_codec.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_generic_codec.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_gsmfr.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_gsmfr.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_ilbc.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_ilbc.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_isac.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_isac.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_isac_macros.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_neteq_unittest.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_opus.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_opus.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_opus_unittest.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_pcm16b.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_pcm16b.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_pcma.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_pcma.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_pcmu.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_pcmu.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_receiver.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_receiver.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_receiver_unittest.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_receiver_unittest_oldapi.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_receive_test.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_receive_test.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_receive_test_oldapi.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_receive_test_oldapi.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_red.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_red.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_resampler.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_resampler.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_send_test.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_send_test.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_send_test_oldapi.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_send_test_oldapi.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_speex.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/acm_speex.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/audio_coding_module.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/audio_coding_module_impl.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/audio_coding_module_impl.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/audio_coding_module_unittest.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/audio_coding_module_unittest_oldapi.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/call_statistics.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/call_statistics.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/call_statistics_unittest.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/initial_delay_manager.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/initial_delay_manager.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/initial_delay_manager_unittest.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/nack.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/nack.h",
    "third_party/webrtc/modules/audio_coding/main/acm2/nack_unittest.cc",
    "third_party/webrtc/modules/audio_coding/main/acm2/OWNERS",
    "third_party/webrtc/modules/audio_coding/neteq/accelerate.cc",
    "third_party/webrtc/modules/audio_coding/neteq/accelerate.h",
    "third_party/webrtc/modules/audio_coding/neteq/audio_classifier.cc",
    "third_party/webrtc/modules/audio_coding/neteq/audio_classifier.h",
    "third_party/webrtc/modules/audio_coding/neteq/audio_classifier_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/audio_decoder_unittests.isolate",
    "third_party/webrtc/modules/audio_coding/neteq/audio_multi_vector.cc",
    "third_party/webrtc/modules/audio_coding/neteq/audio_multi_vector.h",
    "third_party/webrtc/modules/audio_coding/neteq/audio_multi_vector_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/audio_vector.cc",
    "third_party/webrtc/modules/audio_coding/neteq/audio_vector.h",
    "third_party/webrtc/modules/audio_coding/neteq/audio_vector_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/background_noise.cc",
    "third_party/webrtc/modules/audio_coding/neteq/background_noise.h",
    "third_party/webrtc/modules/audio_coding/neteq/background_noise_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/buffer_level_filter.cc",
    "third_party/webrtc/modules/audio_coding/neteq/buffer_level_filter.h",
    "third_party/webrtc/modules/audio_coding/neteq/buffer_level_filter_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/comfort_noise.cc",
    "third_party/webrtc/modules/audio_coding/neteq/comfort_noise.h",
    "third_party/webrtc/modules/audio_coding/neteq/comfort_noise_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/decision_logic.cc",
    "third_party/webrtc/modules/audio_coding/neteq/decision_logic_fax.cc",
    "third_party/webrtc/modules/audio_coding/neteq/decision_logic_fax.h",
    "third_party/webrtc/modules/audio_coding/neteq/decision_logic.h",
    "third_party/webrtc/modules/audio_coding/neteq/decision_logic_normal.cc",
    "third_party/webrtc/modules/audio_coding/neteq/decision_logic_normal.h",
    "third_party/webrtc/modules/audio_coding/neteq/decision_logic_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/decoder_database.cc",
    "third_party/webrtc/modules/audio_coding/neteq/decoder_database.h",
    "third_party/webrtc/modules/audio_coding/neteq/decoder_database_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/defines.h",
    "third_party/webrtc/modules/audio_coding/neteq/delay_manager.cc",
    "third_party/webrtc/modules/audio_coding/neteq/delay_manager.h",
    "third_party/webrtc/modules/audio_coding/neteq/delay_manager_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/delay_peak_detector.cc",
    "third_party/webrtc/modules/audio_coding/neteq/delay_peak_detector.h",
    "third_party/webrtc/modules/audio_coding/neteq/delay_peak_detector_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/dsp_helper.cc",
    "third_party/webrtc/modules/audio_coding/neteq/dsp_helper.h",
    "third_party/webrtc/modules/audio_coding/neteq/dsp_helper_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/dtmf_buffer.cc",
    "third_party/webrtc/modules/audio_coding/neteq/dtmf_buffer.h",
    "third_party/webrtc/modules/audio_coding/neteq/dtmf_buffer_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/dtmf_tone_generator.cc",
    "third_party/webrtc/modules/audio_coding/neteq/dtmf_tone_generator.h",
    "third_party/webrtc/modules/audio_coding/neteq/dtmf_tone_generator_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/expand.cc",
    "third_party/webrtc/modules/audio_coding/neteq/expand.h",
    "third_party/webrtc/modules/audio_coding/neteq/expand_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/merge.cc",
    "third_party/webrtc/modules/audio_coding/neteq/merge.h",
    "third_party/webrtc/modules/audio_coding/neteq/merge_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/neteq.cc",
    "third_party/webrtc/modules/audio_coding/neteq/neteq_external_decoder_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/neteq_impl.cc",
    "third_party/webrtc/modules/audio_coding/neteq/neteq_impl.h",
    "third_party/webrtc/modules/audio_coding/neteq/neteq_impl_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/neteq_stereo_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/neteq_tests.gypi",
    "third_party/webrtc/modules/audio_coding/neteq/neteq_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/normal.cc",
    "third_party/webrtc/modules/audio_coding/neteq/normal.h",
    "third_party/webrtc/modules/audio_coding/neteq/normal_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/OWNERS",
    "third_party/webrtc/modules/audio_coding/neteq/packet_buffer.cc",
    "third_party/webrtc/modules/audio_coding/neteq/packet_buffer.h",
    "third_party/webrtc/modules/audio_coding/neteq/packet_buffer_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/packet.h",
    "third_party/webrtc/modules/audio_coding/neteq/payload_splitter.cc",
    "third_party/webrtc/modules/audio_coding/neteq/payload_splitter.h",
    "third_party/webrtc/modules/audio_coding/neteq/payload_splitter_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/post_decode_vad.cc",
    "third_party/webrtc/modules/audio_coding/neteq/post_decode_vad.h",
    "third_party/webrtc/modules/audio_coding/neteq/post_decode_vad_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/preemptive_expand.cc",
    "third_party/webrtc/modules/audio_coding/neteq/preemptive_expand.h",
    "third_party/webrtc/modules/audio_coding/neteq/random_vector.cc",
    "third_party/webrtc/modules/audio_coding/neteq/random_vector.h",
    "third_party/webrtc/modules/audio_coding/neteq/random_vector_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/rtcp.cc",
    "third_party/webrtc/modules/audio_coding/neteq/rtcp.h",
    "third_party/webrtc/modules/audio_coding/neteq/statistics_calculator.cc",
    "third_party/webrtc/modules/audio_coding/neteq/statistics_calculator.h",
    "third_party/webrtc/modules/audio_coding/neteq/sync_buffer.cc",
    "third_party/webrtc/modules/audio_coding/neteq/sync_buffer.h",
    "third_party/webrtc/modules/audio_coding/neteq/sync_buffer_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/timestamp_scaler.cc",
    "third_party/webrtc/modules/audio_coding/neteq/timestamp_scaler.h",
    "third_party/webrtc/modules/audio_coding/neteq/timestamp_scaler_unittest.cc",
    "third_party/webrtc/modules/audio_coding/neteq/time_stretch.cc",
    "third_party/webrtc/modules/audio_coding/neteq/time_stretch.h",
    "third_party/webrtc/modules/audio_coding/neteq/time_stretch_unittest.cc",
    "third_party/webrtc/modules/module_common_types_unittest.cc",
    "third_party/webrtc/modules/modules_java_chromium.gyp",
    "third_party/webrtc/modules/modules_java.gyp",
    "third_party/webrtc/modules/modules_tests.isolate",
    "third_party/webrtc/modules/modules_unittests.isolate",
    "third_party/webrtc/modules/OWNERS",
    "third_party/webrtc/overrides/OWNERS",
    "third_party/webrtc/p2p/OWNERS",
    "third_party/webrtc/p2p/p2p_tests.gypi",
    "third_party/webrtc/BUILD.gn",
    "third_party/webrtc/LICENSE",
    "third_party/webrtc/LICENSE_THIRD_PARTY",
    "third_party/webrtc/OWNERS",
    "third_party/webrtc/PATENTS",
    "third_party/webrtc/PRESUBMIT.py",
    "third_party/webrtc/README.chromium",
    "third_party/webrtc/call.h",
    "third_party/webrtc/codereview.settings",
    "third_party/webrtc/common.gyp",
    "third_party/webrtc/common.h",
    "third_party/webrtc/common_types.h",
    "third_party/webrtc/config.cc",
    "third_party/webrtc/config.h",
    "third_party/webrtc/engine_configurations.h",
    "third_party/webrtc/experiments.h",
    "third_party/webrtc/frame_callback.h",
    "third_party/webrtc/rtc_unittests.isolate",
    "third_party/webrtc/supplement.gypi",
    "third_party/webrtc/transport.h",
    "third_party/webrtc/typedefs.h",
    "third_party/webrtc/video_decoder.h",
    "third_party/webrtc/video_encoder.h",
    "third_party/webrtc/video_engine_tests.isolate",
    "third_party/webrtc/video_frame.h",
    "third_party/webrtc/video_receive_stream.h",
    "third_party/webrtc/video_renderer.h",
    "third_party/webrtc/video_send_stream.h",
    "third_party/webrtc/webrtc_examples.gyp",
    "third_party/webrtc/webrtc_perf_tests.isolate",
    "third_party/webrtc/webrtc_tests.gypi",
];
